use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::commands::CommandResult;
use crate::printer::CommandPrinter;

pub const KIND: &str = "copy";

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// File to copy
    pub src: PathBuf,

    /// Target file, or an existing directory to copy into
    pub dest: PathBuf,
}

pub fn execute(args: &CopyArgs, printer: &mut dyn CommandPrinter) -> CommandResult<()> {
    let outcome = filemgr_engine::copy(&args.src, &args.dest)?;

    printer
        .print_summary(KIND, &outcome, serde_json::to_value(&outcome)?)
        .context("writing copy result")?;
    Ok(())
}
