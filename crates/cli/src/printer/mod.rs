use std::{
    fmt,
    io::{self, IsTerminal, Write},
    path::Path,
};

use clap::ValueEnum;
use filemgr_engine::Failure;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text with optional colors.
    #[default]
    Human,
    /// NDJSON (one JSON object per line) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
}

/// Sink for command results.
///
/// `kind` names the command that produced the output; JSON printers copy it
/// into every object they write.
pub trait CommandPrinter {
    /// Paths produced by a command, one per line.
    fn print_paths(&mut self, kind: &str, paths: &[&Path]) -> io::Result<()>;

    /// A single result: `text` for people, `value` for machines.
    fn print_summary(&mut self, kind: &str, text: &dyn fmt::Display, value: Value)
    -> io::Result<()>;

    /// Per-file failures of a batch. Always written to the error stream.
    fn print_failures(&mut self, kind: &str, failures: &[Failure]) -> io::Result<()>;

    /// The error that stopped a command.
    fn print_error(&mut self, kind: &str, err: &dyn fmt::Display) -> io::Result<()>;
}

pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    /// `ColorChoice::Auto` means no color here: a generic writer is not known
    /// to be a terminal. [`HumanPrinter::stdout`] checks stdout.
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self {
            out,
            err,
            use_color: cfg.color == ColorChoice::Always,
        }
    }

    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout, io::Stderr> {
        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            err: io::stderr(),
            use_color,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    #[inline]
    fn format_path(&self, path: &Path) -> String {
        if self.use_color {
            format!("\x1b[32m{}\x1b[0m", path.display())
        } else {
            path.display().to_string()
        }
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn stdout() -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

/// Build the printer selected by `cfg`, bound to stdout and stderr.
pub fn make_printer(cfg: PrinterConfig) -> Box<dyn CommandPrinter> {
    match cfg.format {
        OutputFormat::Human => Box::new(HumanPrinter::<io::Stdout, io::Stderr>::stdout(cfg)),
        OutputFormat::Json => Box::new(JsonPrinter::<io::Stdout, io::Stderr>::stdout()),
    }
}

impl<W: Write, E: Write> CommandPrinter for HumanPrinter<W, E> {
    fn print_paths(&mut self, _kind: &str, paths: &[&Path]) -> io::Result<()> {
        for path in paths {
            let path = self.format_path(path);
            writeln!(self.out, "{path}")?;
        }
        Ok(())
    }

    fn print_summary(
        &mut self,
        _kind: &str,
        text: &dyn fmt::Display,
        _value: Value,
    ) -> io::Result<()> {
        let text = text.to_string();
        writeln!(self.out, "{}", text.trim_end_matches('\n'))
    }

    fn print_failures(&mut self, _kind: &str, failures: &[Failure]) -> io::Result<()> {
        for failure in failures {
            writeln!(self.err, "[failed] {failure}")?;
        }
        Ok(())
    }

    fn print_error(&mut self, _kind: &str, err: &dyn fmt::Display) -> io::Result<()> {
        writeln!(self.err, "[error] {err}")
    }
}

impl<W: Write, E: Write> CommandPrinter for JsonPrinter<W, E> {
    fn print_paths(&mut self, kind: &str, paths: &[&Path]) -> io::Result<()> {
        for path in paths {
            let obj = json!({
                "kind": kind,
                "path": path.display().to_string(),
            });
            writeln!(self.out, "{obj}")?;
        }
        Ok(())
    }

    fn print_summary(
        &mut self,
        kind: &str,
        _text: &dyn fmt::Display,
        value: Value,
    ) -> io::Result<()> {
        let obj = match value {
            Value::Object(mut map) => {
                map.insert("kind".to_owned(), Value::from(kind));
                Value::Object(map)
            }
            other => json!({ "kind": kind, "value": other }),
        };
        writeln!(self.out, "{obj}")
    }

    fn print_failures(&mut self, kind: &str, failures: &[Failure]) -> io::Result<()> {
        for failure in failures {
            let obj = json!({
                "type": "failure",
                "kind": kind,
                "path": failure.path.display().to_string(),
                "reason": failure.reason,
            });
            writeln!(self.err, "{obj}")?;
        }
        Ok(())
    }

    fn print_error(&mut self, kind: &str, err: &dyn fmt::Display) -> io::Result<()> {
        let obj = json!({
            "type": "error",
            "kind": kind,
            "message": err.to_string(),
        });
        writeln!(self.err, "{obj}")
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
