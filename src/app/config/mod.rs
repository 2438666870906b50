//! Sweep configuration loading from disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, SweepConfig, parse_sweep_config};

/// Read and parse the sweep configuration at `path`.
pub fn load_sweep_config(path: &Path) -> Result<SweepConfig, AppError> {
    let source = path.display().to_string();
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::ConfigLoad { path: source.clone(), details: e.to_string() })?;

    let config = parse_sweep_config(&source, &content)?;
    debug!(path = %source, "loaded sweep config");
    Ok(config)
}

/// Pick the sweep root: the caller's choice wins over the config's `root`.
pub fn resolve_root(cli_root: Option<&Path>, config: &SweepConfig) -> Result<PathBuf, AppError> {
    cli_root.map(Path::to_path_buf).or_else(|| config.root().cloned()).ok_or(AppError::RootMissing)
}
