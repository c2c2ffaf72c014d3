//! Migrate command - schema management against the configured store.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command.
///
/// Store failures propagate as `AppError::Database`, whose message keeps the cause.
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Manual control: nothing runs until the action says so
    let db = Database::connect_without_migrations(&config.database).await?;
    apply(&db, args.action).await
}

async fn apply(db: &Database, action: MigrateAction) -> AppResult<()> {
    tracing::info!(?action, "Applying migration action");

    match action {
        MigrateAction::Up => db.run_migrations().await?,
        MigrateAction::Down => db.rollback_migration().await?,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every table before re-running migrations");
            db.fresh_migrations().await?
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
        }
    }

    tracing::info!(?action, "Migration action finished");
    Ok(())
}
