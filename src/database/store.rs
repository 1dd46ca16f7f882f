use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::journal_entry::{EntryFields, JournalEntry};

/// Errors from store backends
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Count of rows actually changed by an ownership-scoped mutation.
///
/// Zero is a normal outcome, not an error: the id did not exist, or the row
/// belongs to someone else. The two cases are indistinguishable on purpose,
/// so callers cannot probe for foreign ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    pub affected: u64,
}

impl MutationOutcome {
    pub fn new(affected: u64) -> Self {
        Self { affected }
    }

    /// True when no stored row matched the caller's id/owner pair
    pub fn is_noop(&self) -> bool {
        self.affected == 0
    }
}

/// Storage backend for journal entries, injected into the router as a trait
/// handle. Mutations take the owner explicitly; scoping by owner happens in
/// the backend, never in handlers.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Cheap connectivity probe for the health endpoint
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Insert a new entry owned by `owner`, returning the stored row
    async fn insert(&self, owner: Uuid, fields: &EntryFields) -> Result<JournalEntry, StoreError>;

    /// Every entry in the store, in backend iteration order
    async fn list_all(&self) -> Result<Vec<JournalEntry>, StoreError>;

    /// Entries owned by `owner`
    async fn list_owned(&self, owner: Uuid) -> Result<Vec<JournalEntry>, StoreError>;

    /// Entries whose title equals `title` exactly (case-sensitive)
    async fn find_by_title(&self, title: &str) -> Result<Vec<JournalEntry>, StoreError>;

    /// Replace the writable fields of the entry matching both `id` and `owner`
    async fn update_owned(
        &self,
        owner: Uuid,
        id: Uuid,
        fields: &EntryFields,
    ) -> Result<MutationOutcome, StoreError>;

    /// Remove the entry matching both `id` and `owner`
    async fn delete_owned(&self, owner: Uuid, id: Uuid) -> Result<MutationOutcome, StoreError>;
}
