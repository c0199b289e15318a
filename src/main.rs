//! rootsync command line entry point

use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use rootsync::cli::{Cli, Commands};
use rootsync::commands;
use rootsync::sync::CancellationToken;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Token cancelled on Ctrl-C so a running pass stops between records
fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let handler_token = token.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_token.cancel()) {
        debug!("Could not install Ctrl-C handler: {}", e);
    }
    token
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Sync(args) => commands::sync::run(cli.config, args, interrupt_token()),
        Commands::Show(args) => commands::show::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
