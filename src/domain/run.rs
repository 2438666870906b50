//! Runs and the policy that builds them from parameter mappings.

use crate::domain::AppError;
use crate::domain::sweep::{ParamSet, Scalar};

/// Ordering key for a run: a tuple of scalars compared element by element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunKey(Vec<Scalar>);

impl RunKey {
    pub fn new(parts: Vec<Scalar>) -> Self {
        Self(parts)
    }

    pub fn parts(&self) -> &[Scalar] {
        &self.0
    }
}

impl From<&str> for RunKey {
    fn from(value: &str) -> Self {
        Self(vec![Scalar::Str(value.to_string())])
    }
}

impl From<Scalar> for RunKey {
    fn from(value: Scalar) -> Self {
        Self(vec![value])
    }
}

/// A single invocation: the literal command plus its output directory and sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    cmd: String,
    output_path: Option<String>,
    key: RunKey,
}

impl Run {
    /// Create a run keyed by its command text.
    pub fn new(cmd: impl Into<String>) -> Self {
        let cmd = cmd.into();
        let key = RunKey::from(cmd.as_str());
        Self { cmd, output_path: None, key }
    }

    pub fn with_output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<RunKey>) -> Self {
        self.key = key.into();
        self
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    /// Output directory relative to `outputs/`.
    pub fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    pub fn key(&self) -> &RunKey {
        &self.key
    }
}

/// Policy turning one flat parameter mapping into a [`Run`].
pub trait RunBuilder {
    fn build_run(&self, params: &ParamSet) -> Result<Run, AppError>;

    fn build_runs(&self, params: &[ParamSet]) -> Result<Vec<Run>, AppError> {
        params.iter().map(|p| self.build_run(p)).collect()
    }
}

impl<F> RunBuilder for F
where
    F: Fn(&ParamSet) -> Result<Run, AppError>,
{
    fn build_run(&self, params: &ParamSet) -> Result<Run, AppError> {
        self(params)
    }
}

/// Sort runs by key, keeping the original order of equal keys.
pub fn sort_runs(runs: &mut [Run]) {
    runs.sort_by(|a, b| a.key.cmp(&b.key));
}
