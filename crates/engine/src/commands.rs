//! One entry point per user-facing command.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use filemgr_fs::{Action, Error, NamePattern, Result, Walker};
use log::{debug, info};
use serde::Serialize;

use crate::{
    aggregate::{self, SizeReport},
    relocate::{self, MoveOutcome},
    rename::{self, RenameReport},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyOutcome {
    pub source: PathBuf,
    /// Final file path, with the source name appended when the requested
    /// destination was a directory
    pub destination: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entry", content = "path", rename_all = "snake_case")]
pub enum DeleteOutcome {
    File(PathBuf),
    Directory(PathBuf),
}

/// Copy the file `src` to `dest`, overwriting an existing file.
pub fn copy(src: &Path, dest: &Path) -> Result<CopyOutcome> {
    let meta = fs::metadata(src).map_err(|e| Error::io(Action::Stat, src, e))?;

    let destination = match src.file_name() {
        Some(name) if dest.is_dir() => dest.join(name),
        _ => dest.to_path_buf(),
    };
    let action = Action::Copy {
        to: destination.clone(),
    };

    if meta.is_dir() {
        return Err(Error::Operation {
            action,
            path: src.to_path_buf(),
            source: io::Error::other("source is a directory"),
        });
    }

    if same_file(src, &destination) {
        return Err(Error::Operation {
            action,
            path: src.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "source and destination are the same file",
            ),
        });
    }

    // The source was just checked, so a missing path is on the destination side.
    let bytes = fs::copy(src, &destination).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::not_found(&destination),
        _ => Error::io(action, src, e),
    })?;
    info!(
        "[copy] {} -> {} ({bytes} bytes)",
        src.display(),
        destination.display()
    );

    Ok(CopyOutcome {
        source: src.to_path_buf(),
        destination,
    })
}

/// Both paths resolve to one file. `fs::copy` would truncate it to zero bytes.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Remove a file, or a directory with everything below it.
///
/// A symbolic link is removed itself, never its target.
pub fn delete(path: &Path) -> Result<DeleteOutcome> {
    let meta = fs::symlink_metadata(path).map_err(|e| Error::io(Action::Stat, path, e))?;

    let outcome = if meta.is_dir() {
        fs::remove_dir_all(path).map_err(|e| Error::io(Action::Delete, path, e))?;
        DeleteOutcome::Directory(path.to_path_buf())
    } else {
        fs::remove_file(path).map_err(|e| Error::io(Action::Delete, path, e))?;
        DeleteOutcome::File(path.to_path_buf())
    };

    info!("[delete] {}", path.display());
    Ok(outcome)
}

/// Number of files in `folder`, or in its whole subtree when `recursive`.
pub fn count(folder: &Path, recursive: bool) -> Result<usize> {
    let mut total = 0;
    for visit in Walker::new(folder).recursive(recursive).dirs()? {
        total += visit?.files.len();
    }
    debug!("[count] {}: {total}", folder.display());
    Ok(total)
}

/// Files whose name matches `pattern`, in walk order.
pub fn find(folder: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let pattern = NamePattern::new(pattern)?;

    let mut found = Vec::new();
    for file in Walker::new(folder).recursive(recursive).files()? {
        let file = file?;
        if pattern.matches(&file.name_lossy()) {
            found.push(file.path);
        }
    }

    debug!(
        "[find] {} /{}/: {} matches",
        folder.display(),
        pattern.as_str(),
        found.len()
    );
    Ok(found)
}

pub fn add_date(folder: &Path, recursive: bool) -> Result<RenameReport> {
    rename::add_creation_date(folder, recursive)
}

pub fn analyse(folder: &Path) -> Result<SizeReport> {
    aggregate::analyse(folder)
}

pub fn move_ebooks(folder: &Path) -> Result<MoveOutcome> {
    relocate::move_ebooks(folder)
}

impl fmt::Display for CopyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File {} copied successfully to {}",
            self.source.display(),
            self.destination.display()
        )
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::File(path) => {
                write!(f, "File {} deleted successfully", path.display())
            }
            DeleteOutcome::Directory(path) => write!(
                f,
                "Directory {} and its contents deleted successfully",
                path.display()
            ),
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
