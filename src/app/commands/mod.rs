pub mod expand;
pub mod generate;
