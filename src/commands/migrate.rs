//! Migrate command - applies, reverts or reports schema migrations.
//!
//! Connects without the automatic `up` that `serve` performs so every
//! action here runs against the schema exactly as found.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, MigrationStatus};

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Users and products tables are up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Reverted the most recent migration");
        }
        MigrateAction::Status => print_status(&db.migration_status().await?),
        MigrateAction::Fresh => {
            tracing::warn!("Dropping users and products and rebuilding the schema");
            db.fresh_migrations().await?;
        }
    }

    Ok(())
}

fn print_status(status: &[MigrationStatus]) {
    let pending = status.iter().filter(|m| !m.applied).count();
    for migration in status {
        println!("{migration}");
    }
    println!("{} migration(s), {} pending", status.len(), pending);
}
