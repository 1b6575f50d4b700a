//! Employee Service Library
//!
//! Persistence and use cases for employees, their departments and passports.
//! The HTTP layer embeds it through [`connect`] and [`build_service`].

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DbErr;
use tracing::info;

use crate::config::EmployeeServiceConfig;
use crate::infra::Database;
use crate::repository::EmployeeStore;
use crate::service::{EmployeeManager, EmployeeService};

/// Connect to the database, applying migrations when configured to.
pub async fn connect(config: &EmployeeServiceConfig) -> Result<Database, DbErr> {
    if config.run_migrations {
        Database::connect(&config.database).await
    } else {
        Database::connect_without_migrations(&config.database).await
    }
}

/// Wire repository and service over an open database.
pub fn build_service(db: &Database) -> Arc<dyn EmployeeService> {
    let employee_repo = Arc::new(EmployeeStore::new(db.get_connection()));
    Arc::new(EmployeeManager::new(employee_repo))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = EmployeeServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Subcommand))]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}
