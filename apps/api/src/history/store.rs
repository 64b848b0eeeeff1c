use async_trait::async_trait;
use sqlx::PgPool;

use crate::history::{PredictionStore, StoreError, HISTORY_LIMIT};
use crate::models::prediction::{HistoryItem, NewPrediction};

/// PostgreSQL-backed history. Rows are insert-only.
#[derive(Clone)]
pub struct PgPredictionStore {
    pool: PgPool,
}

impl PgPredictionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PredictionStore for PgPredictionStore {
    async fn create_prediction(&self, record: NewPrediction) -> Result<HistoryItem, StoreError> {
        let item = sqlx::query_as::<_, HistoryItem>(
            r#"
            INSERT INTO predictions
                (cgpa, internships, projects, skill_level, communication_score,
                 prediction, probability, confidence, recommendations)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(record.cgpa)
        .bind(record.internships)
        .bind(record.projects)
        .bind(record.skill_level)
        .bind(record.communication_score)
        .bind(record.prediction)
        .bind(record.probability)
        .bind(&record.confidence)
        .bind(&record.recommendations)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn get_history(&self) -> Result<Vec<HistoryItem>, StoreError> {
        let rows = sqlx::query_as::<_, HistoryItem>(
            "SELECT * FROM predictions ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
