//! Seed command - Inserts the demonstration owners and pets.
//!
//! Runs the same transaction as `GET /init`; a second run fails on the
//! owner primary key and leaves the store untouched.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Persistence};
use crate::services::{PetManager, PetService};

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let uow = Arc::new(Persistence::new(db.get_connection()));
    PetManager::new(uow, config.pets_read_isolation)
        .insert_some_pets()
        .await?;

    tracing::info!("Seed data inserted");
    Ok(())
}
