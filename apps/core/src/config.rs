//! Assistant configuration.
//!
//! Limits that shape aggregation and rendering. The defaults reproduce the
//! reference output exactly; embedders may tune them within the validated
//! ranges.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Tunable aggregation and rendering limits for the assistant.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssistantConfig {
    /// Maximum number of follower questions rendered per answer.
    #[validate(range(min = 1, max = 25))]
    pub max_rendered_questions: usize,
    /// Characters of parent-post context quoted under each question.
    #[validate(range(min = 10, max = 280))]
    pub context_snippet_chars: usize,
    /// Characters of post preview shown per entry in the discussion summary.
    #[validate(range(min = 10, max = 280))]
    pub summary_preview_chars: usize,
    /// Characters of post preview quoted for the most liked topic.
    #[validate(range(min = 10, max = 280))]
    pub top_post_preview_chars: usize,
    /// Replies-per-post average above which engagement counts as high.
    #[validate(range(min = 0.0, max = 100.0))]
    pub high_engagement_threshold: f64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            max_rendered_questions: 5,
            context_snippet_chars: 50,
            summary_preview_chars: 60,
            top_post_preview_chars: 100,
            high_engagement_threshold: 2.0,
        }
    }
}

impl AssistantConfig {
    /// Validate the limits, returning the config on success.
    pub fn validated(self) -> Result<Self, AppError> {
        self.validate()?;
        Ok(self)
    }
}
