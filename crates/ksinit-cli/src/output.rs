//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes user-facing messages to stdout; diagnostics go through tracing.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto resolves to Human on a TTY, Plain when piped.
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    /// Plain line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(|| msg.to_owned())
    }

    /// `✓ msg` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(|| self.marked('\u{2713}', msg, |s| s.green().bold().to_string()))
    }

    /// `⚠ msg` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(|| self.marked('\u{26a0}', msg, |s| s.yellow().bold().to_string()))
    }

    /// Section title.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(|| {
            if self.no_color {
                text.to_owned()
            } else {
                text.cyan().bold().to_string()
            }
        })
    }

    fn emit(&self, render: impl FnOnce() -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&render())
    }

    fn marked(&self, symbol: char, msg: &str, paint: impl Fn(&str) -> String) -> String {
        if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {}", paint(&symbol.to_string()), paint(msg))
        }
    }

    /// Spinner on stderr for long-running steps.  Hidden in quiet and
    /// plain mode; indicatif also hides it when stderr is not a terminal.
    pub fn spinner(&self, msg: impl Into<String>) -> ProgressBar {
        if self.quiet || self.resolved_format == OutputFormat::Plain {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(msg.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }

}
