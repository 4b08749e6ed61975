#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

mod cli;
mod constants;
mod error;
mod event;
#[cfg(test)]
mod fixtures;
mod platform;
mod relay;

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Relay(args) => {
            relay::relay_from_args(args).await?;
        }
        cli::Commands::Assemble(args) => {
            relay::message::assemble_files(&args.qt, &args.non_qt, &args.logs_url, &args.output)?;
        }
    }
    Ok(())
}
