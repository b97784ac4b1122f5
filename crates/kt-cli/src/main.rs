//! Karat CLI - inspect jewellery catalogues and replay shopper selections

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{candidates, inspect, ls, replay, resolve};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Ls(args) => ls::execute(args, &cli.global),
        cli::Commands::Inspect(args) => inspect::execute(args, &cli.global),
        cli::Commands::Candidates(args) => candidates::execute(args, &cli.global),
        cli::Commands::Resolve(args) => resolve::execute(args, &cli.global),
        cli::Commands::Replay(args) => replay::execute(args, &cli.global),
    }
}

/// Log to stderr so table and JSON output on stdout stay clean.
/// `log` records from kt-core are bridged into the subscriber by `init`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kt_core=debug,kt=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
