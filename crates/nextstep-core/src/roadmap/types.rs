//! Wire types for profiles, roadmaps, and chat context.
//!
//! The browser speaks camelCase JSON, so every struct renames its fields
//! at the boundary. Parsing is deliberately permissive: every field
//! defaults when absent and unknown fields are ignored -- a parsed object
//! is never rejected for shape alone.

use serde::{Deserialize, Serialize};

/// Free-text career profile submitted by the user. No field is validated;
/// all may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub education: String,
    pub interests: String,
    pub skills: String,
    pub goals: String,
}

/// One phase of a learning roadmap. `subtopics` ordering is significant
/// and preserved exactly as the model emitted it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadmapPhase {
    pub title: String,
    /// Free-text estimate, e.g. "2-3 months".
    pub duration: String,
    pub description: String,
    pub subtopics: Vec<String>,
}

/// A structured, phase-ordered career-learning plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Roadmap {
    pub career_path: String,
    pub summary: String,
    pub estimated_duration: String,
    /// Sequential learning order; preserved exactly as received.
    pub phases: Vec<RoadmapPhase>,
    /// RFC 3339 timestamp stamped by the pipeline, never trusted from the
    /// model.
    pub generated_date: String,
    /// Echo of the caller's profile, attached by the pipeline.
    pub user_profile: UserProfile,
}

/// A roadmap variant for career changers, emphasizing what carries over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionRoadmap {
    #[serde(flatten)]
    pub roadmap: Roadmap,
    pub transferable_skills: Vec<String>,
    /// Forced to `true` by the pipeline.
    pub is_transition: bool,
    /// The career being transitioned away from, attached by the pipeline.
    pub from_career: String,
}

/// Dashboard context that informs chat replies. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatContext {
    pub career_path: String,
    pub current_phase: String,
}

/// Inbound body of the regenerate endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionRequest {
    pub current_career: String,
    pub new_interests: String,
    pub current_skills: String,
    pub user_profile: UserProfile,
}
