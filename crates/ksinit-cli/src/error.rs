//! Error handling for the ks CLI.
//!
//! Wraps core errors and the few failures that only exist at the CLI edge,
//! and maps each to suggestions, a display style and an exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use ksinit_core::error::{ErrorCategory as CoreCategory, KsError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from the init protocol.
    #[error("{0}")]
    Core(#[from] KsError),

    /// The configuration file or `KSINIT_*` environment is unusable.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation outside the core failed (cwd lookup, terminal writes).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Check KSINIT_* environment variables".into(),
            ],

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the current directory still exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Network => ErrorCategory::Network,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Network       |  5   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Network => 5,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render with ANSI colours for a terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, |part, text| match part {
            Part::Title => format!("{} {}", "\u{2717}".red().bold(), text.red().bold()),
            Part::Message => text.red().to_string(),
            Part::Cause => text.dimmed().to_string(),
            Part::Heading => text.yellow().bold().to_string(),
            Part::Hint => format!("{} {}", "\u{2139}".blue(), text.dimmed()),
        })
    }

    /// Render without ANSI codes, for pipes and `--no-color`.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, |_, text| text.to_owned())
    }

    fn render(&self, verbose: bool, paint: fn(Part, &str) -> String) -> String {
        let mut out = format!(
            "\n{} {}\n",
            paint(Part::Title, "Error:"),
            paint(Part::Message, &self.to_string())
        );

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                out.push_str(&format!(
                    "  {}\n",
                    paint(Part::Cause, &format!("Caused by: {err}"))
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint(Part::Heading, "Suggestions:")));
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint(Part::Hint, "Use -v / --verbose for more details.")
            ));
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Network => tracing::error!("Network error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[derive(Clone, Copy)]
enum Part {
    Title,
    Message,
    Cause,
    Heading,
    Hint,
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid name, selector, or an app that already exists.
    UserError,
    /// Unknown kubeconfig context.
    NotFound,
    /// Kubeconfig or ks configuration problems.
    Configuration,
    /// Schema download failures.
    Network,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use ksinit_core::{application::ApplicationError, domain::DomainError};

    fn core(err: impl Into<KsError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn exit_codes_follow_core_categories() {
        let invalid_selector = core(DomainError::InvalidSpecSelector {
            selector: "bogus".into(),
        });
        let exists = core(ApplicationError::AppAlreadyExists {
            path: PathBuf::from("/work/app"),
        });
        let missing_context = core(ApplicationError::ContextNotFound { name: "dev".into() });
        let bad_kubeconfig = core(ApplicationError::ConfigParse {
            path: PathBuf::from("/home/me/.kube/config"),
            reason: "bad".into(),
        });
        let fetch = core(ApplicationError::SchemaFetch {
            source_desc: "version:v1.7.0".into(),
            reason: "timeout".into(),
        });
        let io = core(ApplicationError::Io {
            path: PathBuf::from("/work/app/app.yaml"),
            reason: "denied".into(),
        });

        assert_eq!(invalid_selector.exit_code(), 2);
        assert_eq!(exists.exit_code(), 2);
        assert_eq!(missing_context.exit_code(), 3);
        assert_eq!(bad_kubeconfig.exit_code(), 4);
        assert_eq!(fetch.exit_code(), 5);
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn cli_only_errors_have_codes() {
        let config = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(config.exit_code(), 4);

        let io: CliError = io::Error::other("gone").into();
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn core_message_is_shown_verbatim() {
        let err = core(ApplicationError::AppAlreadyExists {
            path: PathBuf::from("/work/app"),
        });
        let text = err.format_plain(false);
        assert!(text.contains("Error: Application directory already exists at /work/app"));
        assert!(text.contains("Suggestions:"));
        assert!(text.contains("--verbose"));
    }

    #[test]
    fn colored_output_keeps_text() {
        let err = core(ApplicationError::ContextNotFound { name: "dev".into() });
        let text = err.format_colored(false);
        assert!(text.contains("Context 'dev' not found in kubeconfig"));
        assert!(text.contains("Suggestions:"));
    }

    #[test]
    fn verbose_plain_output_shows_causes() {
        let err = CliError::IoError {
            message: "reading cwd".into(),
            source: io::Error::other("gone"),
        };
        let text = err.format_plain(true);
        assert!(text.contains("Caused by: gone"));
        assert!(!text.contains("--verbose"));
    }
}
