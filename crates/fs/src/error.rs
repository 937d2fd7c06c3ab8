use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The filesystem operation that was being attempted when an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Stat,
    Copy { to: PathBuf },
    Delete,
    Rename { to: PathBuf },
    Move { to: PathBuf },
    CreateDir,
}

impl Action {
    fn verb(&self) -> &'static str {
        match self {
            Action::List => "listing",
            Action::Stat => "reading metadata of",
            Action::Copy { .. } => "copying",
            Action::Delete => "deleting",
            Action::Rename { .. } => "renaming",
            Action::Move { .. } => "moving",
            Action::CreateDir => "creating directory",
        }
    }

    fn target(&self) -> Option<&Path> {
        match self {
            Action::Copy { to } | Action::Rename { to } | Action::Move { to } => Some(to),
            _ => None,
        }
    }
}

/// Renders `<verb> <path>[ to <target>]`, e.g. `copying a.txt to b.txt`.
struct Attempt<'a>(&'a Action, &'a Path);

impl fmt::Display for Attempt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.verb(), self.1.display())?;
        if let Some(to) = self.0.target() {
            write!(f, " to {}", to.display())?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("path {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied {}", Attempt(action, path))]
    PermissionDenied { action: Action, path: PathBuf },

    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed {}: {source}", Attempt(action, path))]
    Operation {
        action: Action,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Error::NotFound { path: path.into() }
    }

    /// Classify an `io::Error` raised while performing `action` on `path`.
    pub fn io(action: Action, path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::not_found(path),
            io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                action,
                path: path.to_path_buf(),
            },
            _ => Error::Operation {
                action,
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// The path the failed operation was applied to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::NotFound { path }
            | Error::PermissionDenied { path, .. }
            | Error::Operation { path, .. } => Some(path),
            Error::InvalidPattern { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
