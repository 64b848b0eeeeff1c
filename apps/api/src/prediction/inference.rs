//! Placement probability from a validated profile.
//!
//! Two paths, chosen once per process by whether an artifact was loaded:
//! - model: logistic regression, `placed` when probability > 0.5
//! - fallback: fixed-weight score / 45 clamped to [0, 1], `placed` when > 0.6
//!
//! The thresholds differ between paths. Both are kept as observed in the
//! deployed system until the intended cut-off is confirmed.

use thiserror::Error;

use crate::prediction::model_repository::ModelArtifact;
use crate::prediction::models::{ProfileInput, FEATURE_COUNT};

pub const MODEL_THRESHOLD: f64 = 0.5;
pub const FALLBACK_THRESHOLD: f64 = 0.6;

/// Fallback weights in feature order.
const FALLBACK_WEIGHTS: [f64; FEATURE_COUNT] = [1.5, 2.0, 1.5, 1.0, 0.8];
const FALLBACK_SCALE: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceMode {
    Model,
    Fallback,
}

impl InferenceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InferenceMode::Model => "model",
            InferenceMode::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inference {
    pub probability: f64,
    pub placed: bool,
    pub mode: InferenceMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InferenceError {
    /// Finite weights can still overflow to `inf - inf` for large features.
    #[error("model produced an undefined logit")]
    UndefinedLogit,
}

/// Probability is always within [0, 1]; a model that cannot produce one errors.
pub fn infer(
    profile: &ProfileInput,
    model: Option<&ModelArtifact>,
) -> Result<Inference, InferenceError> {
    match model {
        Some(model) => infer_with_model(profile, model),
        None => Ok(infer_fallback(profile)),
    }
}

fn infer_with_model(
    profile: &ProfileInput,
    model: &ModelArtifact,
) -> Result<Inference, InferenceError> {
    let logit = model.intercept() + dot(&profile.features(), model.coefficients());
    if logit.is_nan() {
        return Err(InferenceError::UndefinedLogit);
    }
    let probability = sigmoid(logit);
    Ok(Inference {
        probability,
        placed: probability > MODEL_THRESHOLD,
        mode: InferenceMode::Model,
    })
}

fn infer_fallback(profile: &ProfileInput) -> Inference {
    let score = dot(&profile.features(), &FALLBACK_WEIGHTS);
    let probability = (score / FALLBACK_SCALE).clamp(0.0, 1.0);
    Inference {
        probability,
        placed: probability > FALLBACK_THRESHOLD,
        mode: InferenceMode::Fallback,
    }
}

fn dot(features: &[f64; FEATURE_COUNT], weights: &[f64; FEATURE_COUNT]) -> f64 {
    features.iter().zip(weights).map(|(x, w)| x * w).sum()
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
