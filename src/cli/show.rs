use clap::Parser;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show every module's library:\n    rootsync show\n\n\
                  Show one module:\n    rootsync show app\n\n\
                  Show a custom table:\n    rootsync show --library libs.yaml")]
pub struct ShowArgs {
    /// Module to show (all modules if omitted)
    pub module: Option<String>,

    /// Library table to read (defaults to rootsync.library.yaml)
    #[arg(long, short = 'l')]
    pub library: Option<PathBuf>,
}
