/// CRUD operations against a migrated in-memory SQLite database
pub mod crud_tests;

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the customer schema applied.
pub(crate) async fn migrated_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_sqlite_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
