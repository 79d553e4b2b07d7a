//! Assistant facade - the single entry point the chat UI calls.
//!
//! Orchestrates classifier → aggregator → renderer for one query. No state
//! is retained between calls: the same query against the same store always
//! yields the same response, and concurrent callers need no locking.

use std::time::Instant;
use tracing::debug;

use super::aggregate::DataAggregator;
use super::intent::IntentClassifier;
use super::render::ResponseRenderer;
use crate::config::AssistantConfig;
use crate::error::AppError;
use crate::store::ChatStore;

/// Canned follow-up queries the UI offers after each assistant reply.
const QUICK_ACTIONS: &[&str] = &[
    "Summarize today's discussion",
    "What questions do followers have?",
    "Suggest topics for next chat",
    "What topic was most liked?",
];

/// Rule-based group-chat assistant over an immutable feed.
pub struct Assistant {
    store: ChatStore,
    classifier: IntentClassifier,
    aggregator: DataAggregator,
    renderer: ResponseRenderer,
}

impl Assistant {
    /// Create an assistant over a feed with the default limits.
    pub fn new(store: ChatStore) -> Self {
        Self::from_parts(store, &AssistantConfig::default())
    }

    /// Create an assistant with custom limits, validating them first.
    pub fn with_config(store: ChatStore, config: AssistantConfig) -> Result<Self, AppError> {
        let config = config.validated()?;
        Ok(Self::from_parts(store, &config))
    }

    fn from_parts(store: ChatStore, config: &AssistantConfig) -> Self {
        Self {
            store,
            classifier: IntentClassifier::new(),
            aggregator: DataAggregator::new(config),
            renderer: ResponseRenderer::new(config),
        }
    }

    /// Answer a single free-text query. Total: every input, including
    /// unclassifiable text, produces a complete response.
    pub fn answer(&self, query: &str) -> String {
        let start = Instant::now();

        let intent = self.classifier.classify(query);
        let data = self.aggregator.aggregate(intent, &self.store);
        let response = self.renderer.render(&data);

        debug!(
            %intent,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "answered query"
        );
        response
    }

    /// The feed this assistant answers over.
    pub fn store(&self) -> &ChatStore {
        &self.store
    }

    /// Canned follow-up queries for the UI to offer.
    pub fn quick_actions() -> &'static [&'static str] {
        QUICK_ACTIONS
    }
}
