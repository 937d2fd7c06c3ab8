use std::{
    fs::{self, DirEntry},
    io,
    path::{Path, PathBuf},
    vec,
};

use log::{debug, trace};

use crate::{
    error::{Action, Error, Result},
    record::FileEntry,
};

/// Builder for a directory walk.
///
/// The walk is single-threaded and lazy: a directory is listed only when the
/// iterator reaches it, so callers may rename or move the files of a visit
/// before asking for the next one.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    recursive: bool,
    skip: Vec<PathBuf>,
}

/// One directory as seen by the walker.
#[derive(Debug)]
pub struct DirVisit {
    pub dir: PathBuf,
    /// Regular files directly inside `dir`, sorted by name
    pub files: Vec<FileEntry>,
}

impl DirVisit {
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: false,
            skip: Vec::new(),
        }
    }

    /// Descend into subdirectories (unbounded depth).
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Never visit `dir` or anything below it.
    pub fn skip_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skip.push(dir.into());
        self
    }

    /// Walk directory by directory, top-down.
    ///
    /// Fails with [`Error::NotFound`] before yielding anything when the root
    /// is missing or is not a directory.
    pub fn dirs(self) -> Result<DirWalk> {
        check_root(&self.root)?;

        Ok(DirWalk {
            pending: vec![self.root],
            recursive: self.recursive,
            skip: self.skip,
        })
    }

    /// Walk file by file, in the same order as [`Walker::dirs`].
    pub fn files(self) -> Result<FileWalk> {
        Ok(FileWalk {
            dirs: self.dirs()?,
            current: Vec::new().into_iter(),
        })
    }
}

fn check_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::not_found(root)),
        Err(e) => Err(Error::io(Action::Stat, root, e)),
    }
}

/// Iterator over [`DirVisit`]s. Depth-first: a directory is yielded before
/// its subdirectories, siblings in name order.
#[derive(Debug)]
pub struct DirWalk {
    pending: Vec<PathBuf>,
    recursive: bool,
    skip: Vec<PathBuf>,
}

impl DirWalk {
    fn is_skipped(&self, dir: &Path) -> bool {
        self.skip.iter().any(|s| s == dir)
    }

    fn visit(&self, dir: &Path) -> Result<(DirVisit, Vec<PathBuf>)> {
        let rd = fs::read_dir(dir).map_err(|e| Error::io(Action::List, dir, e))?;

        let mut files = Vec::new();
        let mut subdirs = Vec::new();

        for entry_res in rd {
            let entry = entry_res.map_err(|e| Error::io(Action::List, dir, e))?;

            match inspect_entry(dir, &entry)? {
                Inspected::File(file) => files.push(file),
                Inspected::Dir(path) => {
                    if !self.recursive {
                        continue;
                    }
                    if self.is_skipped(&path) {
                        debug!("[walk] skipping {}", path.display());
                        continue;
                    }
                    subdirs.push(path);
                }
                Inspected::Other => {}
            }
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        subdirs.sort();

        trace!(
            "[walk] {}: {} files, {} subdirectories",
            dir.display(),
            files.len(),
            subdirs.len()
        );

        let visit = DirVisit {
            dir: dir.to_path_buf(),
            files,
        };
        Ok((visit, subdirs))
    }
}

impl Iterator for DirWalk {
    type Item = Result<DirVisit>;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.pending.pop()?;

        match self.visit(&dir) {
            Ok((visit, subdirs)) => {
                // Reverse so the smallest name is popped first.
                self.pending.extend(subdirs.into_iter().rev());
                Some(Ok(visit))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Iterator over every [`FileEntry`] of a walk.
#[derive(Debug)]
pub struct FileWalk {
    dirs: DirWalk,
    current: vec::IntoIter<FileEntry>,
}

impl Iterator for FileWalk {
    type Item = Result<FileEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(file) = self.current.next() {
                return Some(Ok(file));
            }

            match self.dirs.next()? {
                Ok(visit) => self.current = visit.files.into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

enum Inspected {
    File(FileEntry),
    Dir(PathBuf),
    Other,
}

fn inspect_entry(dir: &Path, entry: &DirEntry) -> Result<Inspected> {
    let path = entry.path();

    let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Inspected::Other),
        Err(e) => return Err(Error::io(Action::Stat, &path, e)),
    };

    if file_type.is_dir() {
        return Ok(Inspected::Dir(path));
    }

    // `fs::metadata` follows links, so a link to a regular file counts as one.
    let metadata = match fs::metadata(&path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // Dangling link, or the file vanished since the listing.
            debug!("[walk] skipping {}: {e}", path.display());
            return Ok(Inspected::Other);
        }
        Err(e) => return Err(Error::io(Action::Stat, &path, e)),
    };

    if metadata.is_file() {
        return Ok(Inspected::File(FileEntry::from_metadata(
            dir,
            entry.file_name(),
            &metadata,
        )));
    }

    if metadata.is_dir() {
        debug!("[walk] not following directory link {}", path.display());
    } else {
        debug!("[walk] skipping special file {}", path.display());
    }
    Ok(Inspected::Other)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
