use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::commands::CommandResult;
use crate::printer::CommandPrinter;

pub const KIND: &str = "find";

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Folder to search
    pub folder: PathBuf,

    /// Regular expression searched for in each file name
    pub pattern: String,

    /// Search subfolders as well
    #[arg(long, short = 'r')]
    pub recursive: bool,
}

pub fn execute(args: &FindArgs, printer: &mut dyn CommandPrinter) -> CommandResult<()> {
    let found = filemgr_engine::find(&args.folder, &args.pattern, args.recursive)?;

    let paths: Vec<&Path> = found.iter().map(PathBuf::as_path).collect();
    printer
        .print_paths(KIND, &paths)
        .context("writing matches")?;
    Ok(())
}
