//! sweeper: expand a YAML parameter sweep into runnable experiment scripts.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOptions, GenerationOutcome, GenerationPlan, expand_config, plan, write,
};
pub use domain::{
    AppError, ConfigNode, ParamSet, Run, RunBuilder, RunKey, Scalar, Script, SweepConfig,
    TemplateRunBuilder,
};
