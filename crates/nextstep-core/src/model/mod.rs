//! Model client interface for the generative backend.
//!
//! This module defines the [`ModelClient`] trait that concrete backends
//! implement, the shared [`ModelError`] type, and the [`GeminiClient`]
//! implementation against the Generative Language REST API.
//!
//! Handlers hold an `Arc<dyn ModelClient>`, so tests substitute a canned
//! client without touching the network.

pub mod gemini;
pub mod trait_def;

// Re-export the primary public API at the module level.
pub use gemini::GeminiClient;
pub use trait_def::{ModelClient, ModelError};
