//! Conversation transcript, owned by the UI layer.
//!
//! The assistant core is stateless per query; the running conversation is
//! explicit session state held by the embedder. Persistence is best-effort
//! and the embedder's job — the transcript only offers a JSON round-trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Who spoke.
    pub role: Role,
    /// The message text (markdown-lite for assistant turns).
    pub content: String,
    /// When the turn was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Append-only conversation log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one turn, stamped with the current time.
    pub fn record(&mut self, role: Role, content: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        });
    }

    /// All turns in order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all recorded turns.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize for best-effort persistence.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a previously persisted transcript.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }
}
