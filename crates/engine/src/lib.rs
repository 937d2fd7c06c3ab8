mod aggregate;
mod commands;
mod relocate;
mod rename;
mod report;
mod size;

pub use aggregate::{DirSize, FileSize, SizeReport};
pub use commands::*;
pub use relocate::{ConflictPolicy, EbookMoveRecord, MoveOutcome, MoveReport, Relocator};
pub use rename::{RenameRecord, RenameReport, date_prefix, prefixed_name};
pub use report::Failure;

pub use filemgr_fs::{Action, Error, Result};
