//! Main entry point for the gqlmd CLI.

use clap::Parser;
use gqlmd_cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "gqlmd=debug" } else { "gqlmd=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = gqlmd_cli::run(cli)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
