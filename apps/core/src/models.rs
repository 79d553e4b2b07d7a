//! Chat feed data model.
//!
//! The feed is supplied once at startup and treated as read-only: the
//! assistant core only ever borrows it. Reaction tallies use a closed
//! enumeration of kinds; any subset may be present and absent kinds count
//! as zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of reactions a post or reply can receive.
///
/// Declaration order doubles as the tie-breaking order when two kinds have
/// the same count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactionKind {
    Heart,
    Fire,
    Smile,
    Hundred,
    ThumbsUp,
}

impl ReactionKind {
    /// All kinds, in tie-breaking order.
    pub const ALL: [ReactionKind; 5] = [
        ReactionKind::Heart,
        ReactionKind::Fire,
        ReactionKind::Smile,
        ReactionKind::Hundred,
        ReactionKind::ThumbsUp,
    ];

    /// Returns the wire-format name for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            ReactionKind::Heart => "heart",
            ReactionKind::Fire => "fire",
            ReactionKind::Smile => "smile",
            ReactionKind::Hundred => "hundred",
            ReactionKind::ThumbsUp => "thumbsUp",
        }
    }

    /// Returns the display emoji for the kind.
    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionKind::Heart => "❤️",
            ReactionKind::Fire => "🔥",
            ReactionKind::Smile => "😊",
            ReactionKind::Hundred => "💯",
            ReactionKind::ThumbsUp => "👍",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-kind reaction counts. Kinds that were never used are simply absent
/// and count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionTally(BTreeMap<ReactionKind, u32>);

impl ReactionTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for one kind.
    pub fn insert(&mut self, kind: ReactionKind, count: u32) {
        self.0.insert(kind, count);
    }

    /// Count for one kind; absent kinds are zero.
    pub fn count(&self, kind: ReactionKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// The kind with the highest count, or `None` when every count is zero.
    /// Ties go to the kind that orders first.
    pub fn top(&self) -> Option<(ReactionKind, u32)> {
        let mut best: Option<(ReactionKind, u32)> = None;
        for (&kind, &count) in &self.0 {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((kind, count));
            }
        }
        best
    }
}

impl FromIterator<(ReactionKind, u32)> for ReactionTally {
    fn from_iter<I: IntoIterator<Item = (ReactionKind, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A follower reply to a creator post. Nested replies are not expanded;
/// only their count is carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Unique identifier within the feed.
    pub id: u64,
    /// Display name of the follower.
    pub username: String,
    /// Short avatar token (initials).
    pub avatar: String,
    /// Body text of the reply.
    pub content: String,
    /// Number of nested replies under this one.
    #[serde(default)]
    pub reply_count: u32,
    /// Reactions on the reply; may cover any subset of kinds.
    #[serde(default)]
    pub reactions: ReactionTally,
}

impl Reply {
    /// A reply counts as a question when its body contains a literal `?`.
    pub fn is_question(&self) -> bool {
        self.content.contains('?')
    }
}

/// A creator post with its follower replies and reaction tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique identifier within the feed.
    pub id: u64,
    /// Display timestamp, already formatted for the UI.
    pub timestamp: String,
    /// Body text of the post.
    pub content: String,
    /// Reactions on the post; missing in the input means none.
    #[serde(default)]
    pub reactions: ReactionTally,
    /// Follower replies in display order; missing in the input means none.
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl ChatMessage {
    /// Total reactions across all kinds.
    pub fn reaction_total(&self) -> u32 {
        self.reactions.total()
    }

    /// Number of direct replies.
    pub fn reply_total(&self) -> usize {
        self.replies.len()
    }
}

/// The creator profile attached to the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    /// Full display name.
    pub name: String,
    /// Handle, including the leading `@`.
    pub username: String,
    /// Short avatar token (initials).
    pub avatar: String,
    /// Follower count at feed creation time.
    #[serde(default)]
    pub followers: u32,
}
