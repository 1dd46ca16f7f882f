use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::database::JournalStore;

/// Shared application state handed to the router: the storage backend and
/// the token verifier, both injected at startup. Cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JournalStore>,
    pub verifier: TokenVerifier,
}

impl AppState {
    pub fn new(store: Arc<dyn JournalStore>, verifier: TokenVerifier) -> Self {
        Self { store, verifier }
    }
}
