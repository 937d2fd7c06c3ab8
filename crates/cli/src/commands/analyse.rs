use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::commands::CommandResult;
use crate::printer::CommandPrinter;

pub const KIND: &str = "analyse";

#[derive(Debug, Args)]
pub struct AnalyseArgs {
    /// Folder to analyse, always recursively
    pub folder: PathBuf,
}

pub fn execute(args: &AnalyseArgs, printer: &mut dyn CommandPrinter) -> CommandResult<()> {
    let report = filemgr_engine::analyse(&args.folder)?;

    printer
        .print_summary(KIND, &report, serde_json::to_value(&report)?)
        .context("writing size report")?;
    Ok(())
}
