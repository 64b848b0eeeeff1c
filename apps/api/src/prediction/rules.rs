//! Readiness benchmarks shared by recommendations and the roadmap.
//!
//! One ordered table, evaluated in a single pass, so the tips and the
//! checklist always agree.

use crate::prediction::models::{ProfileInput, RoadmapStep, StepStatus};

pub struct Benchmark {
    /// True when the profile meets the benchmark.
    pub is_met: fn(&ProfileInput) -> bool,
    pub recommendation: &'static str,
    pub task: &'static str,
}

pub const BENCHMARKS: &[Benchmark] = &[
    Benchmark {
        is_met: |p: &ProfileInput| p.cgpa >= 8.0,
        recommendation: "Improve CGPA to 8+.",
        task: "Academic Excellence (CGPA 8+)",
    },
    Benchmark {
        is_met: |p: &ProfileInput| p.internships >= 1,
        recommendation: "Get at least one internship.",
        task: "Industry Internship",
    },
    Benchmark {
        is_met: |p: &ProfileInput| p.projects >= 3,
        recommendation: "Build more projects.",
        task: "Project Portfolio (3+ Projects)",
    },
    Benchmark {
        is_met: |p: &ProfileInput| p.skill_level >= 7,
        recommendation: "Upskill technical strengths.",
        task: "Advanced Technical Upskilling",
    },
    Benchmark {
        is_met: |p: &ProfileInput| p.communication_score >= 7,
        recommendation: "Improve communication skills.",
        task: "Soft Skills & Mock Interviews",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    /// Empty when every benchmark is met.
    pub recommendations: Vec<String>,
    /// Always one step per benchmark, in table order.
    pub roadmap: Vec<RoadmapStep>,
}

pub fn assess(profile: &ProfileInput) -> Assessment {
    let mut recommendations = Vec::new();
    let mut roadmap = Vec::with_capacity(BENCHMARKS.len());

    for benchmark in BENCHMARKS {
        let status = if (benchmark.is_met)(profile) {
            StepStatus::Complete
        } else {
            recommendations.push(benchmark.recommendation.to_string());
            StepStatus::Pending
        };
        roadmap.push(RoadmapStep {
            task: benchmark.task.to_string(),
            status,
        });
    }

    Assessment {
        recommendations,
        roadmap,
    }
}
