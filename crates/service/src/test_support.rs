#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// In-memory SQLite connection with migrations applied; one database per call.
pub async fn sqlite_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_sqlite_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
