use serde::{Deserialize, Serialize};

use crate::prediction::confidence::Confidence;

/// Number of features the engine feeds to a model, in `ProfileInput::features` order.
pub const FEATURE_COUNT: usize = 5;

/// Request body as received. Every field is optional so that missing and
/// out-of-range values can be reported per field by `validation`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    pub cgpa: Option<f64>,
    pub internships: Option<f64>,
    pub projects: Option<f64>,
    pub skill_level: Option<f64>,
    pub communication_score: Option<f64>,
}

/// A profile that has passed validation. Only `validation::validate_profile`
/// builds these from request data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub cgpa: f64,
    pub internships: u32,
    pub projects: u32,
    pub skill_level: u8,
    pub communication_score: u8,
}

impl ProfileInput {
    /// Feature vector in training order: cgpa, internships, projects,
    /// skill level, communication score. Trained coefficients depend on it.
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.cgpa,
            f64::from(self.internships),
            f64::from(self.projects),
            f64::from(self.skill_level),
            f64::from(self.communication_score),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Complete,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub task: String,
    pub status: StepStatus,
}

/// Full prediction response returned by `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub placed: bool,
    pub probability: f64,
    pub confidence: Confidence,
    pub recommendations: Vec<String>,
    pub roadmap: Vec<RoadmapStep>,
    pub input: ProfileInput,
}
