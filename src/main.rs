use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod fetch;
mod model;
mod store;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if cli.verbose {
                "bundle_to_chart=debug"
            } else {
                "bundle_to_chart=info"
            })
        }))
        .with_writer(std::io::stderr)
        .init();

    cli::convert::run(&cli).await?;
    Ok(())
}
