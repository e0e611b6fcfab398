mod cli;
mod logging;
mod runner;
mod sources;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use content_engine::{FetchSettings, ReqwestFetcher};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::initialize(cli.log_destination(), cli.log_level());

    let fetcher = ReqwestFetcher::new(FetchSettings {
        request_timeout: Duration::from_secs(cli.timeout_secs),
        ..FetchSettings::default()
    });
    let config = cli.run_config();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(runner::run(cli.selection(), &config, &fetcher))?;
    Ok(())
}
