//! CLI definitions using clap derive API
//!
//! Argument types for each command live in their own submodule:
//! - sync: Sync command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod show;
pub mod sync;

pub use completions::CompletionsArgs;
pub use show::ShowArgs;
pub use sync::SyncArgs;

/// rootsync - resolved dependency synchronization
///
/// Register resolved artifacts into per-module libraries without duplicates.
#[derive(Parser, Debug)]
#[command(
    name = "rootsync",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Synchronize resolved build dependencies into module libraries",
    long_about = "rootsync reads the artifacts an external resolver produced and registers \
                  them as class, source and javadoc roots of each module's library. Running it \
                  again only adds what is new.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  rootsync sync -r resolved.yaml           \x1b[90m# Sync every module\x1b[0m\n   \
                  rootsync sync -r resolved.yaml -m app    \x1b[90m# Sync one module\x1b[0m\n   \
                  rootsync show app                        \x1b[90m# Show a module's library\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to ./rootsync.yaml when present)
    #[arg(long, short = 'c', global = true, env = "ROOTSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register resolved artifacts into module libraries
    Sync(SyncArgs),

    /// Show module libraries and their roots
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
