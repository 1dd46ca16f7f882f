use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::models::{EntryFields, JournalEntry};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// Body for PUT /api/journal/:id responses: echoes the applied fields and
/// reports how many rows changed so callers can tell an update from a no-op.
#[derive(Debug, Serialize)]
pub struct UpdateOutcome {
    pub message: String,
    pub affected: u64,
    pub journal: EntryFields,
}

/// Body for DELETE /api/journal/:id responses
#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub message: String,
    pub affected: u64,
}

/// POST /api/journal - Create an entry owned by the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<Value>,
) -> ApiResult<JournalEntry> {
    let fields = EntryFields::from_payload(&payload)?;
    let entry = state.store.insert(user.id, &fields).await?;

    Ok(ApiResponse::created(entry))
}

/// GET /api/journal/mine - List the caller's own entries
pub async fn list_mine(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<JournalEntry>> {
    let entries = state.store.list_owned(user.id).await?;

    Ok(ApiResponse::success(entries))
}

/// PUT /api/journal/:id - Replace title, date and entry on the caller's row
///
/// Scoped to the row matching both id and owner. A foreign or unknown id is
/// a zero-affected success rather than a not-found or forbidden error, so
/// the existence of other users' rows is never revealed.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<UpdateOutcome> {
    let fields = EntryFields::from_payload(&payload)?;
    let outcome = state.store.update_owned(user.id, id, &fields).await?;

    let message = if outcome.is_noop() {
        "No matching journal entry"
    } else {
        "Journal entry updated"
    };

    Ok(ApiResponse::success(UpdateOutcome {
        message: message.to_string(),
        affected: outcome.affected,
        journal: fields,
    }))
}

/// DELETE /api/journal/:id - Remove the caller's row
///
/// Same zero-affected semantics as update.
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<DeleteOutcome> {
    let outcome = state.store.delete_owned(user.id, id).await?;

    let message = if outcome.is_noop() {
        "No matching journal entry"
    } else {
        "Journal entry removed"
    };

    Ok(ApiResponse::success(DeleteOutcome {
        message: message.to_string(),
        affected: outcome.affected,
    }))
}
