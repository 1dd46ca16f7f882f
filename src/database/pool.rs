use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::store::StoreError;

/// Connect to DATABASE_URL and make sure the journal schema exists
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let url =
        std::env::var("DATABASE_URL").map_err(|_| StoreError::ConfigMissing("DATABASE_URL"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect(&url)
        .await?;

    ensure_schema(&pool).await?;
    info!("Created database pool ({} max connections)", config.max_connections);

    Ok(pool)
}

/// Idempotent DDL so a fresh database is usable without a separate
/// provisioning step
async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS journal_entries (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            date DATE NOT NULL,
            entry TEXT NOT NULL,
            owner UUID NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS journal_entries_owner_idx ON journal_entries (owner)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS journal_entries_title_idx ON journal_entries (title)")
        .execute(pool)
        .await?;

    Ok(())
}
