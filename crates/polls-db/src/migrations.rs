//! Schema migrations
//!
//! Embeds the SQL migrations and applies them on startup.

use sqlx::PgPool;

/// Apply any pending migrations from the embedded `migrations/` directory
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
