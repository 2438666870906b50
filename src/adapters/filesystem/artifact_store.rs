//! `ArtifactStore` implementation for `FilesystemArtifactStore`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

use super::FilesystemArtifactStore;

impl ArtifactStore for FilesystemArtifactStore {
    fn ensure_root(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).map_err(AppError::from)
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        fs::create_dir(full_path).map_err(AppError::from)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn set_executable(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&full_path).map_err(AppError::from)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&full_path, perms).map_err(AppError::from)?;
        }
        #[cfg(not(unix))]
        let _ = full_path;
        Ok(())
    }

    fn replace_symlink(&self, link: &Path, target: &Path) -> Result<(), AppError> {
        let link_path = self.checked_path(link)?;

        match fs::symlink_metadata(&link_path) {
            Ok(meta) if !meta.file_type().is_symlink() => {
                return Err(AppError::SymlinkConflict(link_path));
            }
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        // Build the new link beside the old one, then rename it into place.
        let staging = staging_path(&link_path);
        match fs::symlink_metadata(&staging) {
            Ok(meta) if meta.file_type().is_symlink() => fs::remove_file(&staging)?,
            Ok(_) => return Err(AppError::SymlinkConflict(staging)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        create_symlink(target, &staging)?;
        fs::rename(&staging, &link_path).map_err(AppError::from)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

fn staging_path(link_path: &Path) -> PathBuf {
    let name = link_path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    link_path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> Result<(), AppError> {
    std::os::unix::fs::symlink(target, link).map_err(AppError::from)
}

#[cfg(not(unix))]
fn create_symlink(_target: &Path, _link: &Path) -> Result<(), AppError> {
    let err = io::Error::new(io::ErrorKind::Unsupported, "symlinks require a Unix platform");
    Err(AppError::Io(err))
}
