//! Subcommand handlers.

pub mod completions;
pub mod init;
