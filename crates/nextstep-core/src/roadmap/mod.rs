//! Roadmap domain: wire types, response sanitization, and the pipeline
//! that turns raw model text into a structured, system-stamped roadmap.

pub mod pipeline;
pub mod sanitize;
pub mod types;

// Re-export the primary public API at the module level.
pub use pipeline::{RoadmapError, chat, generate_roadmap, regenerate_roadmap};
pub use sanitize::extract_json_candidate;
pub use types::{
    ChatContext, Roadmap, RoadmapPhase, TransitionRequest, TransitionRoadmap, UserProfile,
};
