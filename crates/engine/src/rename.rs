//! Batch rename: prefix files with their creation date.

use std::{
    ffi::{OsStr, OsString},
    fmt, fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Local};
use filemgr_fs::{Action, Error, FileEntry, Result, Walker};
use filemgr_runtime::{DATE_PREFIX_FORMAT, DATE_PREFIX_SEPARATOR};
use log::{info, warn};
use serde::Serialize;

use crate::report::Failure;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameRecord {
    pub original_path: PathBuf,
    pub new_path: PathBuf,
}

/// Outcome of a batch rename. Renames are not rolled back, so `renamed` is
/// exactly what happened on disk even when `failed` is not empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameReport {
    pub renamed: Vec<RenameRecord>,
    pub failed: Vec<Failure>,
}

impl RenameReport {
    pub fn new_paths(&self) -> impl Iterator<Item = &Path> {
        self.renamed.iter().map(|r| r.new_path.as_path())
    }
}

/// `YYYY-MM-DD` of `time` in local time.
pub fn date_prefix(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(DATE_PREFIX_FORMAT)
        .to_string()
}

/// `<date>_<name>`. The name's bytes are carried over untouched.
pub fn prefixed_name(name: impl AsRef<OsStr>, time: SystemTime) -> OsString {
    let mut prefixed = OsString::from(format!("{}{}", date_prefix(time), DATE_PREFIX_SEPARATOR));
    prefixed.push(name.as_ref());
    prefixed
}

/// Prefix every file under `root` with its creation date, in place.
///
/// Only the root's direct files are renamed unless `recursive` is set. The
/// batch keeps going past per-file failures; running it twice prefixes twice.
pub fn add_creation_date(root: &Path, recursive: bool) -> Result<RenameReport> {
    let mut report = RenameReport::default();

    for visit in Walker::new(root).recursive(recursive).dirs()? {
        let visit = match visit {
            Ok(v) => v,
            Err(e) => {
                warn!("[rename] {e}");
                report.failed.push(Failure::from_error(root, e));
                continue;
            }
        };

        for file in &visit.files {
            match rename_one(file) {
                Ok(record) => {
                    info!(
                        "[rename] {} -> {}",
                        record.original_path.display(),
                        record.new_path.display()
                    );
                    report.renamed.push(record);
                }
                Err(e) => {
                    warn!("[rename] {e}");
                    report.failed.push(Failure::new(&file.path, e));
                }
            }
        }
    }

    Ok(report)
}

fn rename_one(file: &FileEntry) -> Result<RenameRecord> {
    let created = file.creation_time().ok_or_else(|| Error::Operation {
        action: Action::Stat,
        path: file.path.clone(),
        source: io::Error::other("creation time unavailable"),
    })?;

    let new_path = file.parent.join(prefixed_name(&file.name, created));
    let action = Action::Rename {
        to: new_path.clone(),
    };

    // `fs::rename` silently replaces an existing target on Unix.
    if fs::symlink_metadata(&new_path).is_ok() {
        return Err(Error::Operation {
            action,
            path: file.path.clone(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "target already exists"),
        });
    }

    fs::rename(&file.path, &new_path).map_err(|e| Error::io(action, &file.path, e))?;

    Ok(RenameRecord {
        original_path: file.path.clone(),
        new_path,
    })
}

impl fmt::Display for RenameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in self.new_paths() {
            writeln!(f, "{}", path.display())?;
        }
        for failure in &self.failed {
            writeln!(f, "failed: {failure}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "rename_tests.rs"]
mod tests;
