use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use turnstile::cli::Cli;

mod cmd_check;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cmd_check::run(&cli).await
}

/// Diagnostics go to stderr; RUST_LOG overrides the default filter.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "turnstile=debug"
    } else {
        "turnstile=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
