use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use netpipe::cli::{Args, Command};
use netpipe::config::Config;
use netpipe::endpoint::PageLocation;
use netpipe::render::TerminalSink;
use netpipe::{client, pipe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Diagnostics go to stderr so channel output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::View { target, host, insecure, raw } => {
            let host = config.resolve_host(host.as_deref());
            let location = PageLocation::parse(&target, &host, insecure)?;
            if let Err(err) = client::view(&location, TerminalSink::new(raw)).await {
                // The notice was already rendered by the sink; the error only
                // carries the exit status.
                tracing::debug!(error = %err, "viewer terminated");
                process::exit(1);
            }
        }
        Command::Run { host, insecure, command } => {
            let host = config.resolve_host(host.as_deref());
            let location = PageLocation::for_host(host, insecure);
            pipe::run(&location, &command).await?;
        }
    }

    Ok(())
}
