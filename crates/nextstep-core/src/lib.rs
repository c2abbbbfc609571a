//! Core library for the NextStep career guidance backend.
//!
//! Everything domain-shaped lives here: the [`model::ModelClient`] seam to
//! the generative backend, the deterministic prompt templates in
//! [`prompt`], and the [`roadmap`] pipeline that turns free-form model
//! text into a structured, system-stamped roadmap.

pub mod model;
pub mod prompt;
pub mod roadmap;
