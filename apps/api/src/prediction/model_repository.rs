//! Trained logistic-regression artifact, loaded once at startup.
//!
//! A missing file is not an error: the engine then runs in fallback mode for
//! the life of the process. A file that exists but cannot be read, parsed, or
//! has the wrong dimensions or non-finite weights stops startup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::prediction::models::FEATURE_COUNT;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to load model artifact {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("model artifact has wrong shape: {0}")]
    Shape(String),

    #[error("model artifact has invalid weights: {0}")]
    Weights(String),
}

/// On-disk layout written by the training script. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct ArtifactFile {
    intercept: Vec<f64>,
    coefficients: Vec<Vec<f64>>,
    classes: Vec<i64>,
    #[serde(default)]
    accuracy: Option<f64>,
}

/// Validated, immutable model weights for the binary case.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelArtifact {
    intercept: f64,
    coefficients: [f64; FEATURE_COUNT],
    classes: Vec<i64>,
    accuracy: Option<f64>,
}

impl ModelArtifact {
    #[cfg(test)]
    pub fn new(intercept: f64, coefficients: [f64; FEATURE_COUNT], classes: Vec<i64>) -> Self {
        Self {
            intercept,
            coefficients,
            classes,
            accuracy: None,
        }
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64; FEATURE_COUNT] {
        &self.coefficients
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// Held-out accuracy reported by the trainer, if it wrote one.
    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    /// Parses and shape-checks an artifact from JSON text.
    pub fn from_json(path: &Path, raw: &str) -> Result<Self, ModelError> {
        let file: ArtifactFile = serde_json::from_str(raw).map_err(|e| ModelError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        validate_shape(file)
    }
}

fn validate_shape(file: ArtifactFile) -> Result<ModelArtifact, ModelError> {
    let ArtifactFile {
        intercept,
        coefficients,
        classes,
        accuracy,
    } = file;

    let first_intercept = *intercept
        .first()
        .ok_or_else(|| ModelError::Shape("intercept is empty".to_string()))?;
    let first_row = coefficients
        .first()
        .ok_or_else(|| ModelError::Shape("coefficients is empty".to_string()))?;

    if intercept.len() != coefficients.len() {
        return Err(ModelError::Shape(format!(
            "{} intercepts for {} coefficient rows",
            intercept.len(),
            coefficients.len()
        )));
    }

    let row: [f64; FEATURE_COUNT] = first_row.as_slice().try_into().map_err(|_| {
        ModelError::Shape(format!(
            "expected {FEATURE_COUNT} coefficients, found {}",
            first_row.len()
        ))
    })?;

    if !first_intercept.is_finite() {
        return Err(ModelError::Weights(format!(
            "intercept {first_intercept} is not finite"
        )));
    }
    if let Some(i) = row.iter().position(|w| !w.is_finite()) {
        return Err(ModelError::Weights(format!(
            "coefficient {i} ({}) is not finite",
            row[i]
        )));
    }

    Ok(ModelArtifact {
        intercept: first_intercept,
        coefficients: row,
        classes,
        accuracy,
    })
}

/// Loads the artifact at `path`. `Ok(None)` means no file: fallback mode.
pub fn load(path: &Path) -> Result<Option<ModelArtifact>, ModelError> {
    if !path.exists() {
        warn!(
            "Model file {} not found, using fallback scoring",
            path.display()
        );
        return Ok(None);
    }

    let raw = std::fs::read_to_string(path).map_err(|e| ModelError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let artifact = ModelArtifact::from_json(path, &raw)?;

    match artifact.accuracy() {
        Some(accuracy) => info!(
            "Model loaded from {} ({} classes, reported accuracy {accuracy:.2})",
            path.display(),
            artifact.classes().len()
        ),
        None => info!(
            "Model loaded from {} ({} classes)",
            path.display(),
            artifact.classes().len()
        ),
    }

    Ok(Some(artifact))
}
