pub mod add_date;
pub mod analyse;
pub mod copy;
pub mod count;
pub mod delete;
pub mod find;
pub mod move_ebooks;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::debug;

pub use add_date::AddDateArgs;
pub use analyse::AnalyseArgs;
pub use copy::CopyArgs;
pub use count::CountArgs;
pub use delete::DeleteArgs;
pub use find::FindArgs;
pub use move_ebooks::MoveEbooksArgs;

use crate::printer::{ColorChoice, CommandPrinter, OutputFormat, PrinterConfig, make_printer};

/// Common error type for command handlers
pub type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "filemgr",
    version,
    about = "Copy, delete, count, find, rename and sort files from the command line",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub output: OutputOptions,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output results as NDJSON (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,
}

impl OutputOptions {
    pub fn printer_config(&self) -> PrinterConfig {
        PrinterConfig {
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
            color: self.color,
        }
    }

    pub fn make_printer(&self) -> Box<dyn CommandPrinter> {
        make_printer(self.printer_config())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy a file.
    ///
    /// Example:
    ///   filemgr copy notes.txt backup/
    Copy(CopyArgs),

    /// Delete a file, or a directory and everything in it.
    Delete(DeleteArgs),

    /// Count the files in a folder.
    ///
    /// Example:
    ///   filemgr count -r ~/Downloads
    Count(CountArgs),

    /// List files whose name matches a regular expression.
    ///
    /// Example:
    ///   filemgr find -r ~/projects '\.rs$'
    Find(FindArgs),

    /// Prefix file names with their creation date (YYYY-MM-DD_).
    #[command(name = "add_date", alias = "add-date")]
    AddDate(AddDateArgs),

    /// Report the size of a folder, its subfolders and its files.
    #[command(alias = "analyze")]
    Analyse(AnalyseArgs),

    /// Move every .epub, .pdf and .mobi file into <FOLDER>/MyBooks.
    #[command(name = "move_ebooks", alias = "move-ebooks")]
    MoveEbooks(MoveEbooksArgs),
}

impl Command {
    pub fn run(self, output: &OutputOptions) -> ExitCode {
        debug!("[cli] {self:?}");

        let mut printer = output.make_printer();
        let printer = printer.as_mut();

        let (kind, result) = match self {
            Command::Copy(args) => (copy::KIND, copy::execute(&args, printer)),
            Command::Delete(args) => (delete::KIND, delete::execute(&args, printer)),
            Command::Count(args) => (count::KIND, count::execute(&args, printer)),
            Command::Find(args) => (find::KIND, find::execute(&args, printer)),
            Command::AddDate(args) => (add_date::KIND, add_date::execute(&args, printer)),
            Command::Analyse(args) => (analyse::KIND, analyse::execute(&args, printer)),
            Command::MoveEbooks(args) => (move_ebooks::KIND, move_ebooks::execute(&args, printer)),
        };

        finish(kind, printer, result)
    }
}

/// Print the error that stopped a command, if any.
///
/// A recognized command always exits with 0, also when it failed.
pub fn finish(kind: &str, printer: &mut dyn CommandPrinter, result: CommandResult<()>) -> ExitCode {
    if let Err(e) = result
        && printer.print_error(kind, &e).is_err()
    {
        eprintln!("[error] {e}");
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
