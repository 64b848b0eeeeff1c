//! Prediction pipeline: validate → infer → classify → assess → persist.
//!
//! Persistence runs after the result is final. A failed or slow write is
//! logged and the computed result is still returned.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::history::{PredictionStore, StoreError};
use crate::models::prediction::{HistoryItem, NewPrediction};
use crate::prediction::confidence::classify;
use crate::prediction::inference::{infer, InferenceError, InferenceMode};
use crate::prediction::model_repository::ModelArtifact;
use crate::prediction::models::{PredictionResult, ProfileInput, RawProfile};
use crate::prediction::rules::assess;
use crate::prediction::validation::{validate_profile, ValidationError};

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

pub struct PredictionService {
    model: Option<ModelArtifact>,
    store: Arc<dyn PredictionStore>,
    persist_timeout: Duration,
}

impl PredictionService {
    /// `model` is fixed for the life of the service; `None` means fallback scoring.
    pub fn new(
        model: Option<ModelArtifact>,
        store: Arc<dyn PredictionStore>,
        persist_timeout: Duration,
    ) -> Self {
        Self {
            model,
            store,
            persist_timeout,
        }
    }

    pub fn mode(&self) -> InferenceMode {
        if self.model.is_some() {
            InferenceMode::Model
        } else {
            InferenceMode::Fallback
        }
    }

    /// Pure part of the pipeline for an already validated profile.
    pub fn evaluate(
        &self,
        profile: &ProfileInput,
    ) -> Result<PredictionResult, InferenceError> {
        let inference = infer(profile, self.model.as_ref())?;
        let confidence = classify(inference.probability);
        let assessment = assess(profile);

        debug!(
            mode = inference.mode.as_str(),
            probability = inference.probability,
            placed = inference.placed,
            "Prediction computed"
        );

        Ok(PredictionResult {
            placed: inference.placed,
            probability: inference.probability,
            confidence,
            recommendations: assessment.recommendations,
            roadmap: assessment.roadmap,
            input: *profile,
        })
    }

    /// Validates, evaluates, and records a prediction. Storage never fails the call.
    pub async fn predict(&self, raw: &RawProfile) -> Result<PredictionResult, PredictionError> {
        let profile = validate_profile(raw)?;
        let result = self.evaluate(&profile)?;
        self.persist(&result).await;
        Ok(result)
    }

    async fn persist(&self, result: &PredictionResult) {
        match tokio::time::timeout(self.persist_timeout, self.store_result(result)).await {
            Ok(Ok(item)) => debug!("Prediction {} stored", item.id),
            Ok(Err(e)) => error!("Failed to store prediction: {e}"),
            Err(_) => warn!(
                "Storing prediction timed out after {}ms",
                self.persist_timeout.as_millis()
            ),
        }
    }

    async fn store_result(&self, result: &PredictionResult) -> Result<HistoryItem, StoreError> {
        let record = NewPrediction::from_result(result)?;
        self.store.create_prediction(record).await
    }
}
