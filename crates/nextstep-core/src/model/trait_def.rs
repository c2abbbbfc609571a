//! The `ModelClient` trait -- the adapter interface for generative models.
//!
//! Each concrete client (Gemini today, anything else tomorrow) implements
//! this trait. The trait is intentionally object-safe so it can be stored
//! as `Arc<dyn ModelClient>` in server state and replaced with a stub in
//! tests.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a model invocation.
///
/// The pipeline treats every variant as terminal for the current request;
/// there is no retry policy anywhere in this system.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("model request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status (auth, quota, etc.).
    #[error("model API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The API answered 200 but carried no candidates to read text from.
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Adapter interface for prompting a generative language model.
///
/// A single blocking-from-the-caller's-perspective call: one prompt in,
/// one free-form text completion out.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Human-readable name for this client (e.g. "gemini").
    fn name(&self) -> &str;

    /// Send a prompt and return the model's text completion.
    async fn generate_content(&self, prompt: &str) -> Result<String, ModelError>;
}

// Compile-time assertion: ModelClient must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn ModelClient) {}
};
