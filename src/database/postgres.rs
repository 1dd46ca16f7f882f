use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::journal_entry::{EntryFields, JournalEntry};
use crate::database::store::{JournalStore, MutationOutcome, StoreError};

/// Postgres-backed journal store. One statement per operation; the ownership
/// scope for mutations lives in the WHERE clause, so a non-owned or unknown
/// id simply affects zero rows.
pub struct PgJournalStore {
    pool: PgPool,
}

impl PgJournalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JournalStore for PgJournalStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, owner: Uuid, fields: &EntryFields) -> Result<JournalEntry, StoreError> {
        let entry = sqlx::query_as::<_, JournalEntry>(
            r#"
            INSERT INTO journal_entries (title, date, entry, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, date, entry, owner, created_at, updated_at
            "#,
        )
        .bind(&fields.title)
        .bind(fields.date)
        .bind(&fields.entry)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<JournalEntry>, StoreError> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            "SELECT id, title, date, entry, owner, created_at, updated_at FROM journal_entries",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn list_owned(&self, owner: Uuid) -> Result<Vec<JournalEntry>, StoreError> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT id, title, date, entry, owner, created_at, updated_at
            FROM journal_entries
            WHERE owner = $1
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<JournalEntry>, StoreError> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT id, title, date, entry, owner, created_at, updated_at
            FROM journal_entries
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn update_owned(
        &self,
        owner: Uuid,
        id: Uuid,
        fields: &EntryFields,
    ) -> Result<MutationOutcome, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE journal_entries
            SET title = $1, date = $2, entry = $3, updated_at = now()
            WHERE id = $4 AND owner = $5
            "#,
        )
        .bind(&fields.title)
        .bind(fields.date)
        .bind(&fields.entry)
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        Ok(MutationOutcome::new(result.rows_affected()))
    }

    async fn delete_owned(&self, owner: Uuid, id: Uuid) -> Result<MutationOutcome, StoreError> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1 AND owner = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(MutationOutcome::new(result.rows_affected()))
    }
}
