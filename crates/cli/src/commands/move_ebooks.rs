use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use filemgr_engine::{ConflictPolicy, Relocator};

use crate::commands::CommandResult;
use crate::printer::CommandPrinter;

pub const KIND: &str = "move_ebooks";

/// Command-line spelling of [`ConflictPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OnConflict {
    /// Move under `name (N).ext`
    #[default]
    Rename,
    /// Leave the e-book where it is
    Skip,
    /// Replace the copy already in the library
    Overwrite,
}

impl From<OnConflict> for ConflictPolicy {
    fn from(value: OnConflict) -> Self {
        match value {
            OnConflict::Rename => ConflictPolicy::Rename,
            OnConflict::Skip => ConflictPolicy::Skip,
            OnConflict::Overwrite => ConflictPolicy::Overwrite,
        }
    }
}

#[derive(Debug, Args)]
pub struct MoveEbooksArgs {
    /// Folder to collect e-books from
    pub folder: PathBuf,

    /// What to do when the library already holds a file of the same name
    #[arg(long, value_name = "POLICY", value_enum, default_value_t = OnConflict::Rename)]
    pub on_conflict: OnConflict,
}

pub fn execute(args: &MoveEbooksArgs, printer: &mut dyn CommandPrinter) -> CommandResult<()> {
    let outcome = Relocator::new()
        .conflict_policy(args.on_conflict.into())
        .run(&args.folder)?;

    printer
        .print_summary(KIND, &outcome, serde_json::to_value(&outcome)?)
        .context("writing move result")?;
    Ok(())
}
