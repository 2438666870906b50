pub mod error;
pub mod layout;
pub mod run;
pub mod run_template;
pub mod script;
pub mod sweep;
pub mod timestamp;

pub use error::AppError;
pub use layout::SweepLayout;
pub use run::{Run, RunBuilder, RunKey, sort_runs};
pub use run_template::TemplateRunBuilder;
pub use script::{Script, assemble_scripts};
pub use sweep::{ConfigNode, ParamSet, Scalar, SweepConfig, expand, parse_sweep_config};
