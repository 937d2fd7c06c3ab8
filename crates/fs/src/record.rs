use std::{
    borrow::Cow,
    ffi::OsString,
    fs::Metadata,
    path::{Path, PathBuf},
    time::SystemTime,
};

/// A regular file seen by the walker.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path, rooted at whatever root the walker was given
    pub path: PathBuf,
    /// Directory holding the file
    pub parent: PathBuf,
    /// File name, kept as the raw bytes the filesystem returned
    pub name: OsString,
    /// File size in bytes
    pub size: u64,
    /// Birth time, when the platform and filesystem report one
    pub created: Option<SystemTime>,
    /// Last modification time
    pub modified: Option<SystemTime>,
}

impl FileEntry {
    pub(crate) fn from_metadata(parent: &Path, name: OsString, metadata: &Metadata) -> Self {
        Self {
            path: parent.join(&name),
            parent: parent.to_path_buf(),
            name,
            size: metadata.len(),
            created: metadata.created().ok(),
            modified: metadata.modified().ok(),
        }
    }

    /// File name for matching and messages. Bytes that are not valid UTF-8
    /// become U+FFFD.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Timestamp used as the file's creation date.
    ///
    /// Many Unix filesystems cannot report a birth time, in which case the
    /// modification time is the closest stable substitute.
    pub fn creation_time(&self) -> Option<SystemTime> {
        self.created.or(self.modified)
    }
}
