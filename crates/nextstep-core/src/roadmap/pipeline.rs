//! The generation pipeline: prompt -> model -> sanitize -> parse -> stamp.
//!
//! Each function here is one terminal request flow. Failures are explicit
//! [`RoadmapError`] values; there is no retry and no partial result --
//! callers get a complete roadmap or an error, nothing in between.

use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::model::{ModelClient, ModelError};
use crate::prompt;
use crate::roadmap::sanitize::extract_json_candidate;
use crate::roadmap::types::{
    ChatContext, Roadmap, TransitionRequest, TransitionRoadmap, UserProfile,
};

/// Errors from the roadmap pipeline.
#[derive(Debug, Error)]
pub enum RoadmapError {
    /// The model call itself failed (network, auth, quota).
    #[error("model request failed: {0}")]
    Model(#[from] ModelError),

    /// The sanitized model output was not valid JSON. The raw text is
    /// logged for diagnostics, never surfaced to the caller.
    #[error("model output was not valid JSON")]
    Parse(#[source] serde_json::Error),
}

/// Current instant in RFC 3339 UTC -- the `generated_date` stamp.
fn generation_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Sanitize and parse a raw model reply into `T`.
fn parse_reply<T: DeserializeOwned>(raw: &str) -> Result<T, RoadmapError> {
    let candidate = extract_json_candidate(raw);
    serde_json::from_str(candidate).map_err(|e| {
        warn!(error = %e, raw = candidate, "model returned unparseable JSON");
        RoadmapError::Parse(e)
    })
}

/// Generate a roadmap for a user profile.
///
/// On success the roadmap carries a fresh `generated_date` and an exact
/// echo of the caller's profile -- both overwrite anything the model may
/// have emitted under the same names.
pub async fn generate_roadmap(
    model: &dyn ModelClient,
    profile: &UserProfile,
) -> Result<Roadmap, RoadmapError> {
    let prompt = prompt::build_roadmap_prompt(profile);
    let reply = model.generate_content(&prompt).await?;

    let mut roadmap: Roadmap = parse_reply(&reply)?;
    roadmap.generated_date = generation_timestamp();
    roadmap.user_profile = profile.clone();
    Ok(roadmap)
}

/// Generate a transition roadmap for a career changer.
///
/// Stamps `generated_date`, forces `is_transition`, and attaches the
/// caller's current career and profile; the model's `transferableSkills`
/// and phases pass through as received.
pub async fn regenerate_roadmap(
    model: &dyn ModelClient,
    request: &TransitionRequest,
) -> Result<TransitionRoadmap, RoadmapError> {
    let prompt = prompt::build_transition_prompt(
        &request.current_career,
        &request.new_interests,
        &request.current_skills,
        &request.user_profile,
    );
    let reply = model.generate_content(&prompt).await?;

    let mut roadmap: TransitionRoadmap = parse_reply(&reply)?;
    roadmap.roadmap.generated_date = generation_timestamp();
    roadmap.roadmap.user_profile = request.user_profile.clone();
    roadmap.is_transition = true;
    roadmap.from_career = request.current_career.clone();
    Ok(roadmap)
}

/// Answer a chat message. The model's text is relayed as-is after a trim;
/// no sanitization or JSON parsing on this path.
pub async fn chat(
    model: &dyn ModelClient,
    message: &str,
    context: &ChatContext,
) -> Result<String, RoadmapError> {
    let prompt = prompt::build_chat_prompt(message, context);
    let reply = model.generate_content(&prompt).await?;
    Ok(reply.trim().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
