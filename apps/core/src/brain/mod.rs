//! # Brain Module
//!
//! Rule-based analysis pipeline for FanChat. Answers natural-language
//! questions about a group-chat feed without any LLM: keyword rules pick an
//! intent, aggregation derives the data, templates phrase the reply.
//!
//! ## Components
//! - `intent`: intent classification over an ordered keyword rule table
//! - `aggregate`: per-intent data aggregation over the read-only store
//! - `render`: response templates (markdown-lite output)
//! - `assistant`: facade orchestrating the pipeline per query

pub mod aggregate;
pub mod assistant;
pub mod intent;
pub mod render;

// Re-export main types for convenience
pub use aggregate::{
    AggregatedResult, DataAggregator, EngagementTotals, FollowerQuestion, RecentTopic, TopPost,
    TopicSuggestion,
};
pub use assistant::Assistant;
pub use intent::{Intent, IntentClassifier, IntentRule};
pub use render::{to_html, ResponseRenderer};
