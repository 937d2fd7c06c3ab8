use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::commands::CommandResult;
use crate::printer::CommandPrinter;

pub const KIND: &str = "add_date";

#[derive(Debug, Args)]
pub struct AddDateArgs {
    /// Folder whose files get the date prefix
    pub folder: PathBuf,

    /// Rename files in subfolders as well
    #[arg(long, short = 'r')]
    pub recursive: bool,
}

/// New paths go to stdout, files that could not be renamed to stderr.
pub fn execute(args: &AddDateArgs, printer: &mut dyn CommandPrinter) -> CommandResult<()> {
    let report = filemgr_engine::add_date(&args.folder, args.recursive)?;

    let renamed: Vec<&Path> = report.new_paths().collect();
    printer
        .print_paths(KIND, &renamed)
        .context("writing renamed paths")?;
    printer
        .print_failures(KIND, &report.failed)
        .context("writing rename failures")?;
    Ok(())
}
