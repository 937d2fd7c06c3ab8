use std::{
    fmt,
    path::{Path, PathBuf},
};

use filemgr_fs::Error;

use serde::Serialize;

/// A per-file operation of a batch that did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub path: PathBuf,
    pub reason: String,
}

impl Failure {
    pub fn new(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Attribute `err` to the path it names, or to `fallback`.
    pub fn from_error(fallback: &Path, err: Error) -> Self {
        let path = err.path().unwrap_or(fallback).to_path_buf();
        Self::new(path, err)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}
