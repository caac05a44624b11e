use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why an input document could not be turned into a model value.
///
/// Raised only at the loading boundary; the processors never see a
/// partially-loaded document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: document not found", .path.display())]
    DocumentNotFound { path: PathBuf },
    #[error("{}: cannot read document: {source}", .path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: malformed document: {source}", .path.display())]
    DocumentMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "{}: frame layout {width}x{height}, {cols} columns: all three must be positive",
        .path.display()
    )]
    InvalidFrame {
        path: PathBuf,
        width: i64,
        height: i64,
        cols: i64,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::DocumentNotFound { path }
            | LoadError::DocumentUnreadable { path, .. }
            | LoadError::DocumentMalformed { path, .. }
            | LoadError::InvalidFrame { path, .. } => path,
        }
    }
}
