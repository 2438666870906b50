//! Parameter sweep configuration and its expansion into flat mappings.

mod config;
mod expansion;
mod node;
mod params;

pub use config::{RESERVED_KEYS, SweepConfig, parse_sweep_config};
pub use expansion::expand;
pub use node::{ConfigNode, Scalar, join_key_path};
pub use params::ParamSet;
