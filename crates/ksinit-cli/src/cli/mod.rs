//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ks",
    bin_name = "ks",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bootstrap ksonnet application directories",
    long_about = "ks creates the directory layout of a ksonnet application, \
                  binds its default environment to a cluster from your kubeconfig \
                  and generates the Jsonnet library for that cluster's API.",
    after_help = "EXAMPLES:\n\
        \x20 ks init guestbook\n\
        \x20 ks init guestbook --context=minikube --namespace=dev\n\
        \x20 ks init guestbook --api-spec=file:swagger.json\n\
        \x20 ks completions bash > /usr/share/bash-completion/completions/ks",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a ksonnet application.
    #[command(
        about = "Initialize a ksonnet application",
        long_about = "Initialize a ksonnet application in a new directory named <APP_NAME>.\n\n\
            The default environment targets the current kubeconfig context, or the \
            one given with --context. Its Jsonnet library is generated from the API \
            spec chosen with --api-spec:\n\n\
            \x20 version:<tag>   a Kubernetes release, e.g. version:v1.7.1\n\
            \x20 file:<path>     a local swagger.json\n\
            \x20 (empty)         the API server of the selected context",
        after_help = "EXAMPLES:\n\
            \x20 ks init guestbook\n\
            \x20 ks init guestbook --api-spec=version:v1.7.1\n\
            \x20 ks init guestbook --api-spec= --context=prod"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ks completions bash > ~/.local/share/bash-completion/completions/ks\n\
            \x20 ks completions zsh  > ~/.zfunc/_ks\n\
            \x20 ks completions fish > ~/.config/fish/completions/ks.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ks init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the application; also the directory created.
    #[arg(value_name = "APP_NAME")]
    pub name: String,

    /// Where to get the API spec.  Defaults to the configured selector
    /// (`version:v1.7.0` out of the box).
    #[arg(
        long = "api-spec",
        value_name = "SELECTOR",
        help = "API spec source: version:<tag>, file:<path>, or empty for the live cluster"
    )]
    pub api_spec: Option<String>,

    /// Kubeconfig context to target instead of the current one.
    #[arg(long = "context", value_name = "NAME", help = "Kubeconfig context to use")]
    pub context: Option<String>,

    /// Namespace for the default environment.
    #[arg(
        long = "namespace",
        short = 'n',
        value_name = "NAMESPACE",
        help = "Namespace for the default environment (overrides the context's)"
    )]
    pub namespace: Option<String>,

    /// Kubeconfig file, overriding `$KUBECONFIG`.
    #[arg(
        long = "kubeconfig",
        value_name = "FILE",
        help = "Path to the kubeconfig file to use"
    )]
    pub kubeconfig: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ks completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
