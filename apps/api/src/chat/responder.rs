//! Chat responder seam.
//!
//! Default: `KeywordResponder`, the rule-table dispatcher in `dispatcher.rs`.
//! `AppState` holds an `Arc<dyn ChatResponder>`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::chat::dispatcher::{classify, select_response, Entropy, ThreadEntropy};
use crate::errors::AppError;

#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn respond(&self, message: &str) -> Result<String, AppError>;
}

/// Canned replies selected by keyword. Never fails.
pub struct KeywordResponder {
    entropy: Arc<dyn Entropy>,
}

impl KeywordResponder {
    pub fn new(entropy: Arc<dyn Entropy>) -> Self {
        Self { entropy }
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(Arc::new(ThreadEntropy))
    }
}

#[async_trait]
impl ChatResponder for KeywordResponder {
    async fn respond(&self, message: &str) -> Result<String, AppError> {
        match classify(message) {
            Some(intent) => debug!("Chat message matched {intent:?}"),
            None => debug!("Chat message matched no rule, using a fallback reply"),
        }
        Ok(select_response(message, self.entropy.as_ref()).to_string())
    }
}
