//! Copy-to-clipboard for optimized content.
//!
//! The server has no display, so the default clipboard keeps the copied text
//! per session and the response carries it back for the client to place on
//! the user's own clipboard.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use uuid::Uuid;

use crate::errors::AppError;

pub trait Clipboard: Send + Sync {
    fn write_text(&self, session_id: Uuid, text: &str) -> Result<(), AppError>;
    fn read_text(&self, session_id: Uuid) -> Result<Option<String>, AppError>;
    /// Drops whatever the session copied.
    fn forget(&self, session_id: Uuid);
}

#[derive(Default)]
pub struct MemoryClipboard {
    entries: Mutex<HashMap<Uuid, String>>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, session_id: Uuid, text: &str) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AppError::Clipboard(e.to_string()))?;
        entries.insert(session_id, text.to_string());
        Ok(())
    }

    fn read_text(&self, session_id: Uuid) -> Result<Option<String>, AppError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| AppError::Clipboard(e.to_string()))?;
        Ok(entries.get(&session_id).cloned())
    }

    fn forget(&self, session_id: Uuid) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(&session_id);
        }
    }
}

/// The "Copied!" badge: lit from a copy until `hold` has elapsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_lit(&self, now: Instant, hold: Duration) -> bool {
        self.copied_at
            .map(|at| now.saturating_duration_since(at) < hold)
            .unwrap_or(false)
    }

    pub fn label(&self, now: Instant, hold: Duration) -> &'static str {
        if self.is_lit(now, hold) {
            "Copied!"
        } else {
            "Copy"
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CopyResponse {
    pub text: String,
    pub copied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_millis(2000);

    #[tokio::test(start_paused = true)]
    async fn test_indicator_lit_for_two_seconds() {
        let mut indicator = CopyIndicator::default();
        assert!(!indicator.is_lit(Instant::now(), HOLD));

        indicator.mark(Instant::now());
        assert!(indicator.is_lit(Instant::now(), HOLD));
        assert_eq!(indicator.label(Instant::now(), HOLD), "Copied!");

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(indicator.is_lit(Instant::now(), HOLD));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!indicator.is_lit(Instant::now(), HOLD));
        assert_eq!(indicator.label(Instant::now(), HOLD), "Copy");
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_copy_restarts_window() {
        let mut indicator = CopyIndicator::default();
        indicator.mark(Instant::now());
        tokio::time::advance(Duration::from_millis(1500)).await;
        indicator.mark(Instant::now());
        tokio::time::advance(Duration::from_millis(1500)).await;
        assert!(indicator.is_lit(Instant::now(), HOLD));
    }

    #[test]
    fn test_memory_clipboard_is_per_session() {
        let clipboard = MemoryClipboard::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        clipboard.write_text(a, "headline").unwrap();
        assert_eq!(clipboard.read_text(a).unwrap().as_deref(), Some("headline"));
        assert_eq!(clipboard.read_text(b).unwrap(), None);

        clipboard.forget(a);
        assert_eq!(clipboard.read_text(a).unwrap(), None);
    }
}
