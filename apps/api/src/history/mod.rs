//! Prediction history: the persistence side of the service.
//!
//! `AppState` holds an `Arc<dyn PredictionStore>`. Production uses
//! `PgPredictionStore`; tests swap in the in-memory stores below.

pub mod handlers;
pub mod store;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::prediction::{HistoryItem, NewPrediction};
use crate::prediction::models::PredictionResult;

/// Most recent rows returned by `get_history`.
pub const HISTORY_LIMIT: i64 = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("{field} value {value} does not fit the history table")]
    OutOfRange { field: &'static str, value: u32 },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable(e.to_string())
            }
            e => StoreError::Database(e),
        }
    }
}

#[async_trait]
pub trait PredictionStore: Send + Sync {
    async fn create_prediction(&self, record: NewPrediction) -> Result<HistoryItem, StoreError>;

    /// Newest first, at most `HISTORY_LIMIT` rows.
    async fn get_history(&self) -> Result<Vec<HistoryItem>, StoreError>;
}

impl NewPrediction {
    pub fn from_result(result: &PredictionResult) -> Result<Self, StoreError> {
        let input = &result.input;
        Ok(Self {
            cgpa: input.cgpa,
            internships: to_column("internships", input.internships)?,
            projects: to_column("projects", input.projects)?,
            skill_level: i32::from(input.skill_level),
            communication_score: i32::from(input.communication_score),
            prediction: result.placed,
            probability: result.probability,
            confidence: result.confidence.as_str().to_string(),
            recommendations: result.recommendations.clone(),
        })
    }
}

fn to_column(field: &'static str, value: u32) -> Result<i32, StoreError> {
    i32::try_from(value).map_err(|_| StoreError::OutOfRange { field, value })
}
