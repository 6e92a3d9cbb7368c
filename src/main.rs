use anyhow::Context;
use betxtract::adapter::inbound::cli::{self, command::Cli};
use betxtract::infrastructure::config::settings::Config;
use clap::Parser;
use tracing::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    config.init_logging();
    debug!(config = ?cli.config, "betxtract starting");

    if let Err(e) = cli::run(&cli.command, &config).await {
        error!(error = %e, "command failed");
        return Err(e.into());
    }
    Ok(())
}
