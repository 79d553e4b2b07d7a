//! Read-only chat data store.
//!
//! The store is built once from feed JSON and never mutated afterwards;
//! every view below borrows. In the real product the feed would come from a
//! backend — here it is supplied by the embedder or loaded from the bundled
//! sample.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{ChatMessage, Creator, Reply};

/// Bundled sample feed, used by the demo binary and the test suite.
const SAMPLE_FEED: &str = include_str!("../assets/sample_chat.json");

/// An immutable group-chat feed: the creator profile plus their posts in
/// display order (newest first).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStore {
    /// Profile of the creator who owns the feed.
    pub creator: Creator,
    /// Posts in display order.
    pub chat_messages: Vec<ChatMessage>,
}

impl ChatStore {
    /// Parse a feed from JSON.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The bundled sample feed.
    pub fn sample() -> Self {
        serde_json::from_str(SAMPLE_FEED).expect("bundled sample feed is valid JSON")
    }

    /// All posts in display order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.chat_messages
    }

    /// Number of posts in the feed.
    pub fn len(&self) -> usize {
        self.chat_messages.len()
    }

    /// Whether the feed has no posts.
    pub fn is_empty(&self) -> bool {
        self.chat_messages.is_empty()
    }

    /// Every follower reply across all posts, in store order.
    pub fn replies(&self) -> impl Iterator<Item = &Reply> {
        self.chat_messages.iter().flat_map(|msg| msg.replies.iter())
    }

    /// The post with the highest total reaction count. Ties go to the
    /// earlier post in store order; `None` when the feed is empty.
    pub fn most_engaged(&self) -> Option<&ChatMessage> {
        let mut best: Option<&ChatMessage> = None;
        for msg in &self.chat_messages {
            if best.map_or(true, |b| msg.reaction_total() > b.reaction_total()) {
                best = Some(msg);
            }
        }
        best
    }

    /// Replies whose body contains a literal `?`, in store order.
    pub fn recent_questions(&self) -> Vec<&Reply> {
        self.replies().filter(|reply| reply.is_question()).collect()
    }
}
