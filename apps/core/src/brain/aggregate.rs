//! Per-intent data aggregation over the read-only chat store.
//!
//! Pure functions of the store: nothing here mutates the feed or keeps
//! state between queries. Each intent gets exactly the payload its template
//! needs, constructed fresh per query.

use serde::{Deserialize, Serialize};

use super::intent::Intent;
use crate::config::AssistantConfig;
use crate::models::{ChatMessage, ReactionTally};
use crate::store::ChatStore;

/// Preview of one recent post inside the discussion summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTopic {
    /// Full post body; the renderer truncates for display.
    pub content: String,
    /// Direct reply count for the post.
    pub reply_count: usize,
    /// Total reactions across all kinds.
    pub reaction_total: u32,
}

/// A follower reply that contains a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerQuestion {
    /// Display name of the follower who asked.
    pub username: String,
    /// Full question text.
    pub question: String,
    /// Leading snippet of the parent post body, with a trailing ellipsis.
    pub context: String,
}

/// The post that won the most-liked ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPost {
    /// Full post body; the renderer truncates for display.
    pub content: String,
    /// Display timestamp of the post.
    pub timestamp: String,
    /// Direct reply count.
    pub reply_count: usize,
    /// Total reactions across all kinds.
    pub reaction_total: u32,
    /// Per-kind tally, used to name the top reaction.
    pub reactions: ReactionTally,
}

/// One suggested topic with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSuggestion {
    /// Topic label.
    pub topic: String,
    /// Why this topic is worth covering.
    pub reason: String,
}

/// Activity totals and per-post averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementTotals {
    /// Number of posts in the feed.
    pub total_messages: usize,
    /// Total follower replies across all posts.
    pub total_replies: usize,
    /// Total reactions across all posts and kinds.
    pub total_reactions: u32,
    /// Average replies per post, rounded to one decimal. Zero for an empty feed.
    pub avg_replies_per_post: f64,
    /// Average reactions per post, rounded to one decimal. Zero for an empty feed.
    pub avg_reactions_per_post: f64,
}

/// Tagged union of per-intent aggregation payloads. One variant per intent,
/// so the renderer can never receive a payload inconsistent with the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AggregatedResult {
    /// Payload for `summarize_discussion`.
    Summary {
        /// Number of posts in the feed.
        total_messages: usize,
        /// Total follower replies across all posts.
        total_replies: usize,
        /// The first two posts in store order.
        recent: Vec<RecentTopic>,
    },
    /// Payload for `follower_questions`: every question in store order.
    /// Rendering truncates; aggregation does not.
    Questions(Vec<FollowerQuestion>),
    /// Payload for `most_liked_topic`. `None` when the feed is empty.
    MostLiked(Option<TopPost>),
    /// Payload for `topic_suggestions`.
    Suggestions(Vec<TopicSuggestion>),
    /// Payload for `engagement_stats`.
    Engagement(EngagementTotals),
    /// `help` needs no data.
    Help,
}

/// Computes the per-intent dataset the renderer needs.
pub struct DataAggregator {
    context_snippet_chars: usize,
}

impl DataAggregator {
    /// Create an aggregator with the given limits.
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            context_snippet_chars: config.context_snippet_chars,
        }
    }

    /// Aggregate the data for one intent. Pure over the immutable store.
    pub fn aggregate(&self, intent: Intent, store: &ChatStore) -> AggregatedResult {
        match intent {
            Intent::SummarizeDiscussion => self.summarize(store),
            Intent::FollowerQuestions => AggregatedResult::Questions(self.follower_questions(store)),
            Intent::MostLikedTopic => AggregatedResult::MostLiked(self.most_liked(store)),
            Intent::TopicSuggestions => AggregatedResult::Suggestions(suggestions()),
            Intent::EngagementStats => AggregatedResult::Engagement(self.engagement(store)),
            Intent::Help => AggregatedResult::Help,
        }
    }

    fn summarize(&self, store: &ChatStore) -> AggregatedResult {
        let recent = store
            .messages()
            .iter()
            .take(2)
            .map(|msg| RecentTopic {
                content: msg.content.clone(),
                reply_count: msg.reply_total(),
                reaction_total: msg.reaction_total(),
            })
            .collect();

        AggregatedResult::Summary {
            total_messages: store.len(),
            total_replies: store.messages().iter().map(ChatMessage::reply_total).sum(),
            recent,
        }
    }

    fn follower_questions(&self, store: &ChatStore) -> Vec<FollowerQuestion> {
        let mut questions = Vec::new();
        for msg in store.messages() {
            let context = format!(
                "{}...",
                truncate_chars(&msg.content, self.context_snippet_chars)
            );
            for reply in msg.replies.iter().filter(|reply| reply.is_question()) {
                questions.push(FollowerQuestion {
                    username: reply.username.clone(),
                    question: reply.content.clone(),
                    context: context.clone(),
                });
            }
        }
        questions
    }

    fn most_liked(&self, store: &ChatStore) -> Option<TopPost> {
        store.most_engaged().map(|msg| TopPost {
            content: msg.content.clone(),
            timestamp: msg.timestamp.clone(),
            reply_count: msg.reply_total(),
            reaction_total: msg.reaction_total(),
            reactions: msg.reactions.clone(),
        })
    }

    fn engagement(&self, store: &ChatStore) -> EngagementTotals {
        let total_messages = store.len();
        let total_replies: usize = store.messages().iter().map(ChatMessage::reply_total).sum();
        let total_reactions: u32 = store.messages().iter().map(ChatMessage::reaction_total).sum();

        // An empty feed has defined zero averages, never NaN.
        let (avg_replies_per_post, avg_reactions_per_post) = if total_messages == 0 {
            (0.0, 0.0)
        } else {
            (
                round_one_decimal(total_replies as f64 / total_messages as f64),
                round_one_decimal(f64::from(total_reactions) / total_messages as f64),
            )
        };

        EngagementTotals {
            total_messages,
            total_replies,
            total_reactions,
            avg_replies_per_post,
            avg_reactions_per_post,
        }
    }
}

/// The current suggestion list is content-independent.
fn suggestions() -> Vec<TopicSuggestion> {
    vec![
        TopicSuggestion {
            topic: "Work outfit styling".to_string(),
            reason: "Multiple followers asked for professional outfit ideas".to_string(),
        },
        TopicSuggestion {
            topic: "Seasonal favorites for fall".to_string(),
            reason: "High engagement on seasonal content".to_string(),
        },
        TopicSuggestion {
            topic: "Accessory styling guide".to_string(),
            reason: "Recent video on accessories got great feedback".to_string(),
        },
    ]
}

/// First `max` characters of `text`, on char boundaries (bodies contain
/// emoji, so byte slicing is not safe).
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        // 👇 is multi-byte; a byte slice at 4 would panic.
        assert_eq!(truncate_chars("ab👇cd", 3), "ab👇");
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(357.75), 357.8);
        assert_eq!(round_one_decimal(2.5), 2.5);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }

    #[test]
    fn test_suggestions_are_fixed() {
        let list = suggestions();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].topic, "Work outfit styling");
    }
}
