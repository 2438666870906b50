use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

#[derive(Debug, Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    executables: BTreeSet<PathBuf>,
    symlinks: BTreeMap<PathBuf, PathBuf>,
}

/// In-memory artifact store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    state: Arc<Mutex<State>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    pub fn is_executable(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().executables.contains(path.as_ref())
    }

    pub fn symlink(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        self.state.lock().unwrap().symlinks.get(path.as_ref()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn ensure_root(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.dirs.insert(path.to_path_buf()) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "directory exists").into());
        }
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.files.contains_key(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file").into());
        }
        state.executables.insert(path.to_path_buf());
        Ok(())
    }

    fn replace_symlink(&self, link: &Path, target: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.dirs.contains(link) || state.files.contains_key(link) {
            return Err(AppError::SymlinkConflict(link.to_path_buf()));
        }
        state.symlinks.insert(link.to_path_buf(), target.to_path_buf());
        Ok(())
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}
