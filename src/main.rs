mod api;
mod auth;
mod cancel;
mod cli;
mod config;
mod error;
mod joblog;
mod notify;
mod output;
mod repo;
mod routes;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    output::print_banner();

    let cli = Cli::parse();
    info!("Starting mlboard - ML Pipeline Dashboard");
    cli.execute().await?;

    Ok(())
}
