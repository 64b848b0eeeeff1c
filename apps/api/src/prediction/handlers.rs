use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::errors::AppError;
use crate::prediction::models::{PredictionResult, RawProfile};
use crate::state::AppState;

/// POST /api/predict
///
/// Scores a student profile. The result is returned even when storing it
/// in history fails.
pub async fn handle_predict(
    State(state): State<AppState>,
    payload: Result<Json<RawProfile>, JsonRejection>,
) -> Result<Json<PredictionResult>, AppError> {
    let Json(raw) = payload.map_err(|e| AppError::MalformedBody(e.body_text()))?;
    let result = state.predictions.predict(&raw).await?;
    Ok(Json(result))
}
