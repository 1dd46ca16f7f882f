pub mod models;
pub mod pool;
pub mod postgres;
pub mod store;

pub use postgres::PgJournalStore;
pub use store::{JournalStore, MutationOutcome, StoreError};
