use serde::Serialize;
use thiserror::Error;

use crate::prediction::models::{ProfileInput, RawProfile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// One or more profile fields outside their documented domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summary(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

fn summary(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks every field and reports all failures together, in feature order.
/// Values are never clamped.
pub fn validate_profile(raw: &RawProfile) -> Result<ProfileInput, ValidationError> {
    let mut fields = Vec::new();

    let cgpa = check_cgpa(raw.cgpa, &mut fields);
    let internships = check_count("internships", raw.internships, &mut fields);
    let projects = check_count("projects", raw.projects, &mut fields);
    let skill_level = check_rating("skillLevel", raw.skill_level, &mut fields);
    let communication_score =
        check_rating("communicationScore", raw.communication_score, &mut fields);

    match (cgpa, internships, projects, skill_level, communication_score) {
        (
            Some(cgpa),
            Some(internships),
            Some(projects),
            Some(skill_level),
            Some(communication_score),
        ) => Ok(ProfileInput {
            cgpa,
            internships,
            projects,
            skill_level,
            communication_score,
        }),
        _ => Err(ValidationError { fields }),
    }
}

fn reject(fields: &mut Vec<FieldError>, field: &'static str, message: String) {
    fields.push(FieldError { field, message });
}

fn require(
    field: &'static str,
    value: Option<f64>,
    fields: &mut Vec<FieldError>,
) -> Option<f64> {
    match value {
        None => {
            reject(fields, field, format!("{field} is required"));
            None
        }
        Some(v) if !v.is_finite() => {
            reject(fields, field, format!("{field} must be a finite number"));
            None
        }
        Some(v) => Some(v),
    }
}

fn check_cgpa(value: Option<f64>, fields: &mut Vec<FieldError>) -> Option<f64> {
    let v = require("cgpa", value, fields)?;
    if !(0.0..=10.0).contains(&v) {
        reject(fields, "cgpa", format!("cgpa must be between 0 and 10, got {v}"));
        return None;
    }
    Some(v)
}

fn check_whole(field: &'static str, v: f64, fields: &mut Vec<FieldError>) -> bool {
    if v.fract() != 0.0 {
        reject(fields, field, format!("{field} must be a whole number, got {v}"));
        return false;
    }
    true
}

fn check_count(
    field: &'static str,
    value: Option<f64>,
    fields: &mut Vec<FieldError>,
) -> Option<u32> {
    let v = require(field, value, fields)?;
    if !check_whole(field, v, fields) {
        return None;
    }
    if v < 0.0 {
        reject(fields, field, format!("{field} must be 0 or more, got {v}"));
        return None;
    }
    if v > f64::from(u32::MAX) {
        reject(fields, field, format!("{field} is too large, got {v}"));
        return None;
    }
    Some(v as u32)
}

fn check_rating(
    field: &'static str,
    value: Option<f64>,
    fields: &mut Vec<FieldError>,
) -> Option<u8> {
    let v = require(field, value, fields)?;
    if !check_whole(field, v, fields) {
        return None;
    }
    if !(1.0..=10.0).contains(&v) {
        reject(fields, field, format!("{field} must be between 1 and 10, got {v}"));
        return None;
    }
    Some(v as u8)
}
