mod error;
pub mod matcher;
mod record;
mod walker;

pub use error::{Action, Error, Result};
pub use matcher::{NamePattern, has_extension};
pub use record::FileEntry;
pub use walker::{DirVisit, DirWalk, FileWalk, Walker};
