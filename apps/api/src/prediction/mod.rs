// Placement prediction engine.
// Pipeline: validation → inference (model or fallback) → confidence tier →
// benchmark assessment. `service` wires it together and hands results to history.

pub mod confidence;
pub mod handlers;
pub mod inference;
pub mod model_repository;
pub mod models;
pub mod rules;
pub mod service;
pub mod validation;
