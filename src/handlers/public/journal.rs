use axum::extract::{Path, State};

use crate::database::models::JournalEntry;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /journal - List every entry in the store
///
/// Anonymous surface: rows are returned as stored, including the `owner`
/// identifier, so ownership metadata is visible without a credential.
pub async fn list_all(State(state): State<AppState>) -> ApiResult<Vec<JournalEntry>> {
    let entries = state.store.list_all().await?;

    Ok(ApiResponse::success(entries))
}

/// GET /journal/search/:title - List entries whose title matches exactly
///
/// Case-sensitive equality; an unmatched title yields an empty collection,
/// not an error. The dedicated `search` segment keeps every stored title
/// reachable, so no title value collides with another route.
pub async fn search(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Vec<JournalEntry>> {
    let entries = state.store.find_by_title(&title).await?;

    Ok(ApiResponse::success(entries))
}
