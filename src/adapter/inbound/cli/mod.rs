//! CLI module graph.

pub mod command;
pub mod extract;
pub mod sites;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

use command::Commands;

/// Dispatch a parsed command.
pub async fn run(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Extract(args) => extract::execute(args, config).await,
        Commands::Sites(args) => sites::execute(args, config),
    }
}
