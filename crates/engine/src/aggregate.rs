//! Recursive size analysis.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use filemgr_fs::{DirVisit, Result, Walker};
use log::debug;
use serde::Serialize;

use crate::size::{format_gib, format_mib};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirSize {
    pub path: PathBuf,
    /// Sum of the files directly inside `path`; subdirectories are not rolled up
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSize {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Sizes of a tree: one entry per directory (traversal order), one entry per
/// file, and the grand total.
///
/// Every directory only counts its direct files, so `total_bytes` equals
/// both the sum over `directories` and the sum over `files`.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub root: PathBuf,
    pub total_bytes: u64,
    pub directories: Vec<DirSize>,
    pub files: Vec<FileSize>,
}

impl SizeReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            total_bytes: 0,
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    fn record(&mut self, visit: DirVisit) {
        let dir_bytes = visit.total_bytes();

        self.files.extend(visit.files.into_iter().map(|f| FileSize {
            path: f.path,
            bytes: f.size,
        }));
        self.directories.push(DirSize {
            path: visit.dir,
            bytes: dir_bytes,
        });
        self.total_bytes += dir_bytes;
    }
}

/// Walk `root` recursively and total up file sizes.
///
/// Any listing or stat failure aborts the analysis; partial totals are never
/// returned.
pub fn analyse(root: &Path) -> Result<SizeReport> {
    let mut report = SizeReport::new(root);

    for visit in Walker::new(root).recursive(true).dirs()? {
        report.record(visit?);
    }

    debug!(
        "[analyse] {}: {} bytes in {} files, {} directories",
        root.display(),
        report.total_bytes,
        report.files.len(),
        report.directories.len()
    );

    Ok(report)
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Full size: {}", format_gib(self.total_bytes))?;
        for dir in &self.directories {
            writeln!(f, "> - {} {}", dir.path.display(), format_gib(dir.bytes))?;
        }
        for file in &self.files {
            writeln!(f, "> - {} {}", file.path.display(), format_mib(file.bytes))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
