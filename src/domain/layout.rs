//! Path catalog for one generated sweep folder.
//!
//! ```text
//! <root>/
//!   latest -> <timestamp>
//!   <timestamp>/
//!     config.yaml
//!     scripts/0.sh .. (N-1).sh
//!     outputs/<output_path>/
//! ```

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

pub const CONFIG_FILE: &str = "config.yaml";
pub const SCRIPTS_DIR: &str = "scripts";
pub const OUTPUTS_DIR: &str = "outputs";
pub const LATEST_LINK: &str = "latest";

/// Paths of one timestamped sweep folder, relative to the sweep root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepLayout {
    folder: PathBuf,
}

impl SweepLayout {
    pub fn new(timestamp: &str) -> Self {
        Self { folder: PathBuf::from(timestamp) }
    }

    /// The timestamped folder.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn config_file(&self) -> PathBuf {
        self.folder.join(CONFIG_FILE)
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.folder.join(SCRIPTS_DIR)
    }

    pub fn script_file(&self, index: usize) -> PathBuf {
        self.scripts_dir().join(format!("{}.sh", index))
    }

    pub fn outputs_dir(&self) -> PathBuf {
        self.folder.join(OUTPUTS_DIR)
    }

    /// Directory for a run's output, after checking it stays under `outputs/`.
    pub fn output_dir(&self, output_path: &str) -> Result<PathBuf, AppError> {
        validate_output_path(output_path)?;
        Ok(self.outputs_dir().join(output_path))
    }

    pub fn latest_link() -> PathBuf {
        PathBuf::from(LATEST_LINK)
    }
}

/// Reject output paths that are empty, absolute, or climb out of `outputs/`.
pub fn validate_output_path(output_path: &str) -> Result<(), AppError> {
    let path = Path::new(output_path);
    let mut depth: usize = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| AppError::PathTraversal(output_path.to_string()))?;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(AppError::PathTraversal(output_path.to_string()));
            }
        }
    }
    if depth == 0 {
        return Err(AppError::PathTraversal(output_path.to_string()));
    }
    Ok(())
}
