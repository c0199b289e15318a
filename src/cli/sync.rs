use clap::Parser;
use std::path::PathBuf;

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Sync every module in a report:\n    rootsync sync --report build/resolved.yaml\n\n\
                  Sync one module into a custom table:\n    rootsync sync -r resolved.json --module app --library libs.yaml\n\n\
                  Preview without writing:\n    rootsync sync -r resolved.yaml --dry-run")]
pub struct SyncArgs {
    /// Resolution report written by the resolver (YAML or JSON)
    #[arg(long, short = 'r')]
    pub report: PathBuf,

    /// Library table to sync into (defaults to rootsync.library.yaml)
    #[arg(long, short = 'l')]
    pub library: Option<PathBuf>,

    /// Only sync this module
    #[arg(long, short = 'm')]
    pub module: Option<String>,

    /// Show what would be registered without saving the library table
    #[arg(long)]
    pub dry_run: bool,
}
