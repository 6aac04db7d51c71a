//! Error types for tree and scanning operations.

use std::path::PathBuf;

use thiserror::Error;

/// Contract violations detected by [`OrderedTree`](crate::OrderedTree).
///
/// Both variants indicate a caller bug; the offending operation is aborted
/// and the tree is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The tree is not in a state that permits the operation.
    #[error("Invalid tree state: {message}")]
    InvalidState { message: String },

    /// A position does not belong to this tree.
    #[error("Invalid position: {message}")]
    InvalidArgument { message: String },
}

impl TreeError {
    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Errors that can occur while scanning a directory source.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path does not exist.
    #[error("Root path not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Failure reported by a non-filesystem directory source.
    #[error("Directory source error: {message}")]
    Source { message: String },

    /// The builder violated the tree's contract.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Whether the error rejects the root path itself, before any entry
    /// was read. Failures below a valid root are never classified so.
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::RootNotFound { .. } | Self::NotADirectory { .. })
    }

    /// Create a source error from any displayable message.
    pub fn source_failure(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }
}
