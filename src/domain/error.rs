use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for sweeper operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file is missing, unreadable, or not valid YAML.
    #[error("Failed to load config '{path}': {details}")]
    ConfigLoad { path: String, details: String },

    /// A configuration node cannot be used as a parameter axis.
    #[error("Invalid config at '{path}': {reason}")]
    ConfigShape { path: String, reason: String },

    /// A parameter axis expands to zero combinations.
    #[error("Parameter '{path}' expands to no values (empty list)")]
    EmptyExpansion { path: String },

    /// The timestamped root folder already exists.
    #[error("Output folder already exists: {}", .0.display())]
    DirectoryCollision(PathBuf),

    /// The `latest` path exists and is not a symlink.
    #[error("Refusing to replace '{}': it exists and is not a symlink", .0.display())]
    SymlinkConflict(PathBuf),

    /// Neither the caller nor the config supplied a root directory.
    #[error("No root directory: pass --root or set 'root' in the config")]
    RootMissing,

    /// An output path escapes the outputs directory.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Two runs resolve to the same output directory.
    #[error("Output path '{0}' is used by more than one run")]
    DuplicateOutputPath(String),

    /// Command template failed to compile or render.
    #[error("Template error in {what}: {details}")]
    Template { what: String, details: String },
}

impl AppError {
    pub fn shape<P: Into<String>, R: Into<String>>(path: P, reason: R) -> Self {
        AppError::ConfigShape { path: path.into(), reason: reason.into() }
    }

    pub fn template<W: Into<String>, D: ToString>(what: W, details: D) -> Self {
        AppError::Template { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigShape { .. }
            | AppError::EmptyExpansion { .. }
            | AppError::PathTraversal(_)
            | AppError::DuplicateOutputPath(_)
            | AppError::Template { .. } => io::ErrorKind::InvalidInput,
            AppError::ConfigLoad { .. } => io::ErrorKind::InvalidData,
            AppError::RootMissing => io::ErrorKind::NotFound,
            AppError::DirectoryCollision(_) | AppError::SymlinkConflict(_) => {
                io::ErrorKind::AlreadyExists
            }
        }
    }
}
