//! Filesystem side effects of sweep generation.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for writing sweep artifacts.
///
/// All `path` arguments are relative to the store root (the sweep root
/// directory). Implementations must reject paths that escape the root.
pub trait ArtifactStore {
    /// Create the store root and its parents if missing.
    fn ensure_root(&self) -> Result<(), AppError>;

    /// Create one directory. Fails with `io::ErrorKind::AlreadyExists` if present.
    fn create_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write UTF-8 content to a file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Set the executable bit on a file (Unix-only).
    fn set_executable(&self, path: &Path) -> Result<(), AppError>;

    /// Point the symlink `link` at `target`, replacing an existing symlink.
    ///
    /// Fails with [`AppError::SymlinkConflict`] if `link` exists and is not a symlink.
    fn replace_symlink(&self, link: &Path, target: &Path) -> Result<(), AppError>;

    /// Resolve a relative path to where it lives on disk.
    fn resolve_path(&self, path: &Path) -> PathBuf;
}
