//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together config
//! loading, context creation, and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemArtifactStore, SystemClock};
use crate::app::config::{load_sweep_config, resolve_root};
use crate::app::{AppContext, commands::expand, commands::generate};
use crate::domain::{ParamSet, RunBuilder};

pub use crate::app::commands::generate::{GenerationOutcome, GenerationPlan};
pub use crate::domain::AppError;

/// Options for [`write`].
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Sweep root; falls back to the config's `root`.
    pub root: Option<PathBuf>,
    /// Number of scripts; `0` means one script per run.
    pub num_scripts: usize,
    /// Point `<root>/latest` at the new folder.
    pub make_symlink: bool,
}

/// Generate scripts and the output tree for the sweep described at `config_path`.
pub fn write(
    config_path: &Path,
    builder: &impl RunBuilder,
    options: &GenerateOptions,
) -> Result<GenerationOutcome, AppError> {
    let config = load_sweep_config(config_path)?;
    let root = resolve_root(options.root.as_deref(), &config)?;
    let ctx = AppContext::new(FilesystemArtifactStore::new(root), SystemClock);

    generate::execute(&ctx, &config, builder, options.num_scripts, options.make_symlink)
}

/// Compute the runs and scripts for the sweep at `config_path` without writing anything.
pub fn plan(
    config_path: &Path,
    builder: &impl RunBuilder,
    num_scripts: usize,
) -> Result<GenerationPlan, AppError> {
    let config = load_sweep_config(config_path)?;
    GenerationPlan::build(&config, builder, num_scripts)
}

/// Expand the sweep at `config_path` into flat parameter mappings.
pub fn expand_config(config_path: &Path) -> Result<Vec<ParamSet>, AppError> {
    let config = load_sweep_config(config_path)?;
    expand::execute(&config)
}
