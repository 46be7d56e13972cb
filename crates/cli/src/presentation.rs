// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use anstyle::{AnsiColor, Color, Style};
use k_toolkit_engine::{EngineError, ExecutionOutcome, ProgressSink};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct Palette {
    ok: Style,
    error: Style,
}

impl Palette {
    pub fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                ok: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))),
                error: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))),
            }
        } else {
            Self::default()
        }
    }

    /// Colored only when stdout is a terminal.
    pub fn for_stdout() -> Self {
        Self::new(io::stdout().is_terminal())
    }

    /// Colored only when stderr is a terminal.
    pub fn for_stderr() -> Self {
        Self::new(io::stderr().is_terminal())
    }

    fn ok(&self, text: &str) -> String {
        format!("{}{text}{}", self.ok.render(), self.ok.render_reset())
    }

    fn error(&self, text: &str) -> String {
        format!("{}{text}{}", self.error.render(), self.error.render_reset())
    }
}

/// Prints one status line per merged or failed file to stdout.
pub struct ConsoleProgress {
    palette: Palette,
}

impl ConsoleProgress {
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

pub fn merged_line(palette: &Palette, path: &Path, bytes: u64) -> String {
    format!("[ {} ] Merged {bytes} bytes from: {}", palette.ok("OK"), path.display())
}

pub fn failed_line(palette: &Palette, path: &Path) -> String {
    format!("[ {} ] {}", path.display(), palette.error("ERROR"))
}

impl ProgressSink for ConsoleProgress {
    fn on_merged(&self, path: &Path, bytes: u64) {
        println!("{}", merged_line(&self.palette, path, bytes));
    }

    fn on_failed(&self, path: &Path, _error: &EngineError) {
        println!("{}", failed_line(&self.palette, path));
    }
}

/// Human-readable summary. Success goes to `out`, failures to `err`, each
/// styled with the palette chosen for its own stream.
pub fn write_outcome<O: Write, E: Write>(
    out: (&mut O, &Palette),
    err: (&mut E, &Palette),
    outcome: &ExecutionOutcome,
) -> io::Result<()> {
    let (out, out_palette) = out;
    let (err, err_palette) = err;

    if outcome.is_ok() {
        writeln!(out)?;
        return writeln!(out, "[ {} ] {}", out_palette.ok("OK"), outcome.message);
    }

    if !outcome.validation.is_valid && !outcome.validation.errors.is_empty() {
        writeln!(err, "{}", err_palette.error("Execution terminated due to validation errors:"))?;
        writeln!(err)?;
        for message in &outcome.validation.errors {
            writeln!(err, "{}", err_palette.error(&format!(" - {message}")))?;
        }
    } else {
        writeln!(err, "{}", err_palette.error("Execution failed:"))?;
        writeln!(err)?;
        writeln!(err, "{}", err_palette.error(&format!(" - {}", outcome.message)))?;
    }
    writeln!(err)
}

pub fn print_outcome(outcome: &ExecutionOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outcome)?;
            println!("{json}");
        }
        OutputFormat::Text => write_outcome(
            (&mut io::stdout().lock(), &Palette::for_stdout()),
            (&mut io::stderr().lock(), &Palette::for_stderr()),
            outcome,
        )?,
    }
    Ok(())
}
