use std::sync::Arc;

use crate::chat::responder::{ChatResponder, KeywordResponder};
use crate::config::Config;
use crate::panels::copy::{Clipboard, MemoryClipboard};
use crate::panels::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Pluggable chat responder. Default: KeywordResponder.
    pub responder: Arc<dyn ChatResponder>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: SessionStore::default(),
            responder: Arc::new(KeywordResponder::default()),
            clipboard: Arc::new(MemoryClipboard::default()),
        }
    }
}
