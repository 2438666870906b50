//! Expand a sweep config into flat parameter mappings without generating anything.

use crate::domain::{AppError, ParamSet, SweepConfig, expand};

pub fn execute(config: &SweepConfig) -> Result<Vec<ParamSet>, AppError> {
    expand(config.params())
}
