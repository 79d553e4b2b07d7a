//! Intent classification using an ordered keyword rule table.
//!
//! Pattern-based intent detection - no ML model required. The table is
//! evaluated top to bottom and the first matching rule wins, so evaluation
//! order is part of the contract: `follower_questions` sits above
//! `most_liked_topic`, meaning any query containing "question" takes that
//! tag even when other keywords co-occur, and `engagement_stats` sits below
//! `most_liked_topic` so that "highest engagement" is not intercepted by
//! the broader "engagement" term.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detected intent type. A closed enumeration; queries that match no rule
/// resolve to `Help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Summary of the current discussion (message and reply totals).
    SummarizeDiscussion,
    /// Questions followers asked in replies.
    FollowerQuestions,
    /// The post with the highest total reaction count.
    MostLikedTopic,
    /// Suggested topics for the next post.
    TopicSuggestions,
    /// Activity totals and per-post averages.
    EngagementStats,
    /// Fallback: explain what the assistant can do.
    Help,
}

impl Intent {
    /// Returns a human-readable label for the intent.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::SummarizeDiscussion => "summarize_discussion",
            Intent::FollowerQuestions => "follower_questions",
            Intent::MostLikedTopic => "most_liked_topic",
            Intent::TopicSuggestions => "topic_suggestions",
            Intent::EngagementStats => "engagement_stats",
            Intent::Help => "help",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the classification table: an intent and its trigger clauses
/// in disjunctive normal form. A clause matches when every term appears as
/// a substring of the lowercased query; the rule matches when any clause
/// does.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    /// The intent this rule resolves to.
    pub intent: Intent,
    clauses: &'static [&'static [&'static str]],
}

impl IntentRule {
    fn matches(&self, lowered: &str) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.iter().all(|term| lowered.contains(term)))
    }
}

/// Rule table in evaluation order.
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::SummarizeDiscussion,
        clauses: &[&["summarize"], &["summary"], &["discussion"]],
    },
    IntentRule {
        intent: Intent::FollowerQuestions,
        clauses: &[&["question"], &["asking"], &["want to know"]],
    },
    IntentRule {
        intent: Intent::MostLikedTopic,
        clauses: &[
            &["most liked"],
            &["most popular"],
            &["highest engagement"],
            &["topic", "liked"],
        ],
    },
    IntentRule {
        intent: Intent::TopicSuggestions,
        clauses: &[&["topic", "suggest"]],
    },
    IntentRule {
        intent: Intent::EngagementStats,
        clauses: &[&["engagement"], &["active"], &["participation"]],
    },
];

/// Intent classifier over the ordered rule table.
pub struct IntentClassifier {
    rules: &'static [IntentRule],
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier with the built-in rule table.
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Classify the intent of a query. Pure and total: every input maps to
    /// an intent, with `Help` as the fallback.
    pub fn classify(&self, query: &str) -> Intent {
        let lowered = query.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Help)
    }

    /// The rule table in evaluation order.
    pub fn rules(&self) -> &[IntentRule] {
        self.rules
    }
}
