use std::sync::Arc;

use crate::history::PredictionStore;
use crate::prediction::service::PredictionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup around the loaded model (or fallback mode).
    pub predictions: Arc<PredictionService>,
    /// Same store the prediction service writes to; read by the history endpoint.
    pub store: Arc<dyn PredictionStore>,
}
