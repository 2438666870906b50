//! Shared testing utilities for sweeper CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `sweeper` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sweeper").expect("Failed to locate sweeper binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a sweep config into the work directory and return its path.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Path of the sweep root `runs/` inside the work directory.
    pub fn runs_dir(&self) -> PathBuf {
        self.work_dir.join("runs")
    }

    /// Timestamped folders under the sweep root, sorted by name.
    pub fn sweep_folders(&self) -> Vec<PathBuf> {
        let mut folders: Vec<PathBuf> = fs::read_dir(self.runs_dir())
            .expect("runs dir should exist")
            .map(|entry| entry.expect("dir entry").path())
            .filter(|path| path.file_name().is_some_and(|n| n != "latest") && path.is_dir())
            .filter(|path| !fs::symlink_metadata(path).unwrap().file_type().is_symlink())
            .collect();
        folders.sort();
        folders
    }

    /// The single timestamped folder, panicking if there is not exactly one.
    pub fn only_sweep_folder(&self) -> PathBuf {
        let folders = self.sweep_folders();
        assert_eq!(folders.len(), 1, "expected exactly one sweep folder: {:?}", folders);
        folders.into_iter().next().unwrap()
    }
}
