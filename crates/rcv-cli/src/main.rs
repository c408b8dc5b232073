#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rcv error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    let ctx = context::AppContext::new(bootstrap::load_config()?);
    tracing::debug!(
        backend = ctx.config.backend.base_url(),
        limit = ctx.default_limit(),
        "configuration loaded"
    );

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// `RCV_LOG` wins over the verbosity flags when it parses.
fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let fallback = match (flags.quiet, flags.verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RCV_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("could not install the log subscriber: {error}"))
}
