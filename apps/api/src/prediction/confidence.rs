use serde::{Deserialize, Serialize};

/// Coarse summary of how decisive a probability is.
/// Variant order gives `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

/// `> 0.8` → High, `> 0.4` → Medium, otherwise Low.
pub fn classify(probability: f64) -> Confidence {
    if probability > 0.8 {
        Confidence::High
    } else if probability > 0.4 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
