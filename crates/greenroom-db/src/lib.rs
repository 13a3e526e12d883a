//! Persistence layer for the greenroom API
//!
//! SeaORM entities for the two record types (actors and movies) plus
//! connect/migrate helpers. The web layer talks to this crate through plain
//! insert/update/delete/find operations; transaction discipline beyond
//! single statements is not needed here.

pub mod entities;
pub mod migrator;

use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

pub use migrator::Migrator;

/// Connect to the database at `url`.
///
/// Accepts anything SeaORM does: `postgres://…`, `sqlite://./greenroom.db?mode=rwc`,
/// or `sqlite::memory:`.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    info!("connecting to database");
    Database::connect(url).await
}

/// Run all pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("running database migrations");
    Migrator::up(db, None).await
}
