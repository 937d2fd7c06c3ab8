use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::commands::CommandResult;
use crate::printer::CommandPrinter;

pub const KIND: &str = "delete";

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// File or directory to remove
    pub path: PathBuf,
}

pub fn execute(args: &DeleteArgs, printer: &mut dyn CommandPrinter) -> CommandResult<()> {
    let outcome = filemgr_engine::delete(&args.path)?;

    printer
        .print_summary(KIND, &outcome, serde_json::to_value(&outcome)?)
        .context("writing delete result")?;
    Ok(())
}
