//! Schema history, embedded from `migrations/`.

use diesel_async::AsyncPgConnection;
use diesel_async_migrations::EmbeddedMigrations;
use tracing::info;

use crate::error::SlimeError;

pub(crate) static MIGRATIONS: EmbeddedMigrations = diesel_async_migrations::embed_migrations!();

/// Applies, in order, every revision the database has not seen yet.
pub async fn run_pending_migrations(conn: &mut AsyncPgConnection) -> Result<(), SlimeError> {
    MIGRATIONS
        .run_pending_migrations(conn)
        .await
        .map_err(SlimeError::Migration)?;

    if let Some(latest) = MIGRATIONS.migrations.last() {
        info!(latest = %latest.name, "database schema is up to date");
    }
    Ok(())
}
