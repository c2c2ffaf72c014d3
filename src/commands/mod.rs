//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod migrate;
pub mod seed;
pub mod serve;

use crate::cli::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Dispatch a parsed command
pub async fn run(command: Commands, config: Config) -> AppResult<()> {
    match command {
        Commands::Serve(args) => serve::execute(args, config).await,
        Commands::Migrate(args) => migrate::execute(args, config).await,
        Commands::Seed => seed::execute(config).await,
    }
}
