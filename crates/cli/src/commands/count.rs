use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::json;

use crate::commands::CommandResult;
use crate::printer::CommandPrinter;

pub const KIND: &str = "count";

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Folder to count files in
    pub folder: PathBuf,

    /// Include files in subfolders
    #[arg(long, short = 'r')]
    pub recursive: bool,
}

pub fn execute(args: &CountArgs, printer: &mut dyn CommandPrinter) -> CommandResult<()> {
    let total = filemgr_engine::count(&args.folder, args.recursive)?;

    printer
        .print_summary(KIND, &total, json!({ "count": total }))
        .context("writing count")?;
    Ok(())
}
