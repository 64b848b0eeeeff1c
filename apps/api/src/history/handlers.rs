use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::prediction::HistoryItem;
use crate::state::AppState;

/// GET /api/history
///
/// Most recent 100 predictions, newest first.
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryItem>>, AppError> {
    let history = state.store.get_history().await?;
    Ok(Json(history))
}
