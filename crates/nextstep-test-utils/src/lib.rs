//! Shared test helpers: canned model clients and roadmap fixtures.
//!
//! Integration tests in other crates build their router or pipeline
//! against these stubs instead of the real Gemini endpoint.

use async_trait::async_trait;

use nextstep_core::model::{ModelClient, ModelError};

/// A model client that returns the same canned reply for every prompt.
pub struct CannedModel {
    reply: String,
}

impl CannedModel {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl ModelClient for CannedModel {
    fn name(&self) -> &str {
        "canned"
    }

    async fn generate_content(&self, _prompt: &str) -> Result<String, ModelError> {
        Ok(self.reply.clone())
    }
}

/// A model client that fails every call, as a quota-exhausted upstream
/// would.
pub struct FailingModel;

#[async_trait]
impl ModelClient for FailingModel {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate_content(&self, _prompt: &str) -> Result<String, ModelError> {
        Err(ModelError::Api {
            status: 429,
            body: "quota exceeded".to_string(),
        })
    }
}

/// A complete, valid roadmap reply as the model should emit it.
pub fn sample_roadmap_json() -> &'static str {
    r#"{
  "careerPath": "Data Engineering",
  "summary": "Strong alignment between current skills and goals.",
  "estimatedDuration": "12-18 months",
  "phases": [
    {
      "title": "Foundations",
      "duration": "2-3 months",
      "description": "Core data tooling.",
      "subtopics": ["SQL", "Python for data", "Git", "Linux basics"]
    },
    {
      "title": "Pipelines",
      "duration": "3-4 months",
      "description": "Batch and streaming pipelines.",
      "subtopics": ["Airflow", "Spark", "Kafka", "Data modeling"]
    },
    {
      "title": "Production",
      "duration": "3-4 months",
      "description": "Running pipelines in production.",
      "subtopics": ["Docker", "CI/CD", "Monitoring", "Cloud warehouses"]
    }
  ]
}"#
}

/// A complete, valid transition-roadmap reply.
pub fn sample_transition_json() -> &'static str {
    r#"{
  "careerPath": "Machine Learning Engineering",
  "summary": "Existing engineering background carries most of the way.",
  "estimatedDuration": "9-12 months",
  "transferableSkills": ["Python", "SQL", "System design"],
  "phases": [
    {
      "title": "Bridge the gap",
      "duration": "2 months",
      "description": "Builds directly on what you already know.",
      "subtopics": ["NumPy", "Pandas", "Statistics", "Linear algebra"]
    },
    {
      "title": "Modeling",
      "duration": "4 months",
      "description": "New ground.",
      "subtopics": ["scikit-learn", "PyTorch", "Evaluation", "MLOps basics"]
    }
  ]
}"#
}

/// Wrap a reply in a triple-backtick fence with a `json` language tag,
/// as models do despite instructions.
pub fn fenced(body: &str) -> String {
    format!("```json\n{body}\n```")
}
