//! Collect e-books scattered through a tree into one library directory.

use std::{
    ffi::{OsStr, OsString},
    fmt, fs, io,
    path::{Path, PathBuf},
};

use filemgr_fs::{Action, Error, FileEntry, Result, Walker, has_extension};
use filemgr_runtime::{EBOOK_DIR_NAME, EBOOK_EXTENSIONS};
use log::{debug, info, warn};
use serde::Serialize;

use crate::report::Failure;

/// What to do when the library already holds a file with the same name.
///
/// Only the base name survives a move, so `a/book.epub` and `b/book.epub`
/// compete for the same slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Leave the source where it is.
    Skip,
    /// Replace the file already in the library.
    Overwrite,
    /// Move under the first free `stem (N).ext` name.
    #[default]
    Rename,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EbookMoveRecord {
    pub original_path: PathBuf,
    pub destination_path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveReport {
    pub library: PathBuf,
    pub moved: Vec<EbookMoveRecord>,
    /// E-books left in place by [`ConflictPolicy::Skip`]
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<Failure>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The walk found nothing to move. Not an error.
    NoEbooks { root: PathBuf },
    Moved(MoveReport),
}

#[derive(Debug, Clone)]
pub struct Relocator {
    library_name: String,
    extensions: Vec<String>,
    policy: ConflictPolicy,
}

impl Default for Relocator {
    fn default() -> Self {
        Self {
            library_name: EBOOK_DIR_NAME.to_owned(),
            extensions: EBOOK_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
            policy: ConflictPolicy::default(),
        }
    }
}

impl Relocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn library_name(mut self, name: impl Into<String>) -> Self {
        self.library_name = name.into();
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Move every e-book under `root` into `root/<library>`.
    ///
    /// The library directory is created when missing and is never walked
    /// itself, so a second run over the same tree finds nothing to do.
    pub fn run(&self, root: &Path) -> Result<MoveOutcome> {
        let library = root.join(&self.library_name);

        // Validates the root before anything is created under it.
        let walk = Walker::new(root)
            .recursive(true)
            .skip_dir(&library)
            .files()?;

        fs::create_dir_all(&library).map_err(|e| Error::io(Action::CreateDir, &library, e))?;

        let suffixes: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        let mut found = 0usize;
        let mut report = MoveReport {
            library: library.clone(),
            moved: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        };

        for entry in walk {
            let file = match entry {
                Ok(f) => f,
                Err(e) => {
                    warn!("[relocate] {e}");
                    report.failed.push(Failure::from_error(root, e));
                    continue;
                }
            };

            if !has_extension(&file.name_lossy(), &suffixes) {
                continue;
            }
            found += 1;

            match self.move_one(&file, &library) {
                Ok(Some(record)) => {
                    info!(
                        "[relocate] {} -> {}",
                        record.original_path.display(),
                        record.destination_path.display()
                    );
                    report.moved.push(record);
                }
                Ok(None) => {
                    debug!("[relocate] {} already in library, skipped", file.path.display());
                    report.skipped.push(file.path);
                }
                Err(e) => {
                    warn!("[relocate] {e}");
                    report.failed.push(Failure::new(&file.path, e));
                }
            }
        }

        if found == 0 && report.failed.is_empty() {
            return Ok(MoveOutcome::NoEbooks {
                root: root.to_path_buf(),
            });
        }

        Ok(MoveOutcome::Moved(report))
    }

    /// `Ok(None)` when the policy decided to leave the file alone.
    fn move_one(&self, file: &FileEntry, library: &Path) -> Result<Option<EbookMoveRecord>> {
        let mut destination = library.join(&file.name);

        if occupied(&destination) {
            match self.policy {
                ConflictPolicy::Skip => return Ok(None),
                ConflictPolicy::Overwrite => {}
                ConflictPolicy::Rename => destination = free_name(library, &file.name),
            }
        }

        move_file(&file.path, &destination).map_err(|e| {
            Error::io(
                Action::Move {
                    to: destination.clone(),
                },
                &file.path,
                e,
            )
        })?;

        Ok(Some(EbookMoveRecord {
            original_path: file.path.clone(),
            destination_path: destination,
        }))
    }
}

/// [`Relocator`] with the default library, suffixes and policy.
pub fn move_ebooks(root: &Path) -> Result<MoveOutcome> {
    Relocator::default().run(root)
}

/// `fs::rename`, or copy then remove when `to` is on another filesystem.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(
                "[relocate] {} is on another device, copying",
                from.display()
            );
            copy_then_remove(from, to)
        }
        other => other,
    }
}

/// Not atomic: a failed removal leaves both copies in place.
fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    fs::remove_file(from)
}

fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// First `stem (N).ext` under `dir` that does not exist yet, N from 1.
fn free_name(dir: &Path, name: &OsStr) -> PathBuf {
    let as_path = Path::new(name);
    let stem = as_path.file_stem().unwrap_or(name);
    let ext = as_path.extension();

    let mut n = 1u32;
    loop {
        let mut candidate = OsString::from(stem);
        candidate.push(format!(" ({n})"));
        if let Some(ext) = ext {
            candidate.push(".");
            candidate.push(ext);
        }
        let path = dir.join(candidate);
        if !occupied(&path) {
            return path;
        }
        n += 1;
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = match self {
            MoveOutcome::NoEbooks { root } => {
                return writeln!(f, "No e-books to move in '{}'", root.display());
            }
            MoveOutcome::Moved(report) => report,
        };

        if report.skipped.is_empty() && report.failed.is_empty() {
            return writeln!(f, "All e-books moved to '{}'.", report.library.display());
        }

        writeln!(
            f,
            "Moved {} e-books to '{}'.",
            report.moved.len(),
            report.library.display()
        )?;
        for path in &report.skipped {
            writeln!(f, "skipped: {} (name already taken)", path.display())?;
        }
        for failure in &report.failed {
            writeln!(f, "failed: {failure}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "relocate_tests.rs"]
mod tests;
