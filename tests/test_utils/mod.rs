//! Test utilities for database testing.
//!
//! Provides an in-memory SQLite database with all migrations applied.
//! Foreign keys stay enforced so the seeder's references are checked.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    // Every pooled connection to `sqlite::memory:` opens its own database.
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
