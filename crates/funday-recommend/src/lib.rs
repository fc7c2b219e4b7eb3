//! Recommendation composer for Funday.
//!
//! Builds a structured natural-language prompt from location, weather,
//! family composition, date/time, budget and candidate places, sends it to
//! the Anthropic Messages API, and repairs the model's semi-structured
//! reply into typed, UI-ready activity records.

pub mod budget;
pub mod client;
pub mod compose;
pub mod prompt;
pub mod types;

pub use budget::filter_by_budget;
pub use client::AnthropicClient;
pub use compose::get_recommendations;
pub use prompt::build_prompt;
pub use types::{Activity, ActivitySource, RecommendError, RecommendationRequest, RecommendationResponse};
