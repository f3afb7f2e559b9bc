//! `goalflow-ai` — typed client for the OpenAI-compatible completions
//! endpoint behind goalflow's drafting features.
//!
//! Two operations live here, both deliberately infallible at the surface:
//!
//! - [`suggest_goal`] turns free-form input into a [`GoalSuggestion`] tree
//!   (title, subgoals, tasks, tags, deadline). Any failure degrades to the
//!   deterministic fallback skeleton from `goalflow_core::suggest`.
//! - [`summarize_week`] digests a goal's task comments into a
//!   [`WeeklySummary`]. A goal without comments never hits the network.
//!
//! The HTTP layer is a small blocking [`ChatClient`] over typed request and
//! response structs; no `Value` escape hatches. Configuration (model, base
//! URL, token limits, which environment variable names the key) comes from
//! `goalflow_core::config::AiConfig`.
//!
//! [`GoalSuggestion`]: goalflow_core::suggest::GoalSuggestion
//! [`WeeklySummary`]: goalflow_core::goal::WeeklySummary

pub mod client;
pub mod error;
pub mod suggest;
pub mod summary;


pub use client::{ChatClient, ChatMessage};
pub use error::AiError;
pub use suggest::suggest_goal;
pub use summary::summarize_week;

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, AiError>;
