//! Everything the CLI writes to stdout.
//!
//! Two kinds of lines go through here: status messages (`success`,
//! `warning`, `header`), which `--quiet` hides, and results (`result*`,
//! `json`), which are always written.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Colour of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Correct answers and completed actions.
    Good,
    /// Wrong answers and stage errors.
    Bad,
    Warn,
    /// Timing lines and headers.
    Detail,
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// `auto` becomes `human` on a terminal and `plain` otherwise. Colour
    /// needs `human` and neither `--no-color` nor `output.no_color`.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };
        let color = format == OutputFormat::Human && !args.no_color && !config.output.no_color;

        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// `✓ msg`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2713}', msg, Tone::Good)
    }

    /// `⚠ msg`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status('\u{26a0}', msg, Tone::Warn)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            text.bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }

    pub fn result(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// No newline; flushed so the text shows while a solution runs.
    pub fn result_inline(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    pub fn result_toned(&self, text: &str, tone: Tone) -> io::Result<()> {
        self.term.write_line(&self.paint(text, tone))
    }

    /// One compact document per line.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let line = serde_json::to_string(value).map_err(io::Error::other)?;
        self.term.write_line(&line)
    }

    fn status(&self, symbol: char, msg: &str, tone: Tone) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&self.paint(&format!("{symbol} {msg}"), tone))
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_owned();
        }
        match tone {
            Tone::Good => text.green().to_string(),
            Tone::Bad => text.red().to_string(),
            Tone::Warn => text.yellow().to_string(),
            Tone::Detail => text.cyan().to_string(),
        }
    }
}
