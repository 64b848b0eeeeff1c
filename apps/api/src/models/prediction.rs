use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored prediction, as returned by `GET /api/history`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: i32,
    pub cgpa: f64,
    pub internships: i32,
    pub projects: i32,
    pub skill_level: i32,
    pub communication_score: i32,
    pub prediction: bool,
    pub probability: f64,
    pub confidence: String,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `predictions` table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPrediction {
    pub cgpa: f64,
    pub internships: i32,
    pub projects: i32,
    pub skill_level: i32,
    pub communication_score: i32,
    pub prediction: bool,
    pub probability: f64,
    pub confidence: String,
    pub recommendations: Vec<String>,
}
