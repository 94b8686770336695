//! In-memory session store. A session lives until it is deleted, sits idle
//! past the configured TTL, or the process exits; nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::panels::copy::Clipboard;
use crate::panels::Workspace;

struct Entry {
    workspace: Workspace,
    last_seen: Instant,
}

impl Entry {
    fn touch(&mut self) -> &mut Workspace {
        self.last_seen = Instant::now();
        &mut self.workspace
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
}

impl SessionStore {
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let entry = Entry {
            workspace: Workspace::default(),
            last_seen: Instant::now(),
        };
        self.inner.write().await.insert(id, entry);
        info!("Session {id} created");
        id
    }

    /// Returns false when the session did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.inner.write().await.remove(&id).is_some();
        if removed {
            info!("Session {id} discarded");
        }
        removed
    }

    /// Reads count as activity, so this takes the write lock to refresh the
    /// idle clock.
    pub async fn read<T>(&self, id: Uuid, f: impl FnOnce(&Workspace) -> T) -> Result<T, AppError> {
        let mut sessions = self.inner.write().await;
        let entry = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        Ok(f(entry.touch()))
    }

    /// Runs `f` under the write lock. Never hold it across a simulated delay.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Workspace) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.inner.write().await;
        let entry = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        f(entry.touch())
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Drops every session untouched for at least `ttl` and returns their ids.
    pub async fn evict_idle(&self, ttl: Duration) -> Vec<Uuid> {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let expired: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, entry)| now.saturating_duration_since(entry.last_seen) >= ttl)
            .map(|(id, _)| *id)
            .collect();
        for id in &expired {
            sessions.remove(id);
        }
        expired
    }
}

/// Periodically evicts idle sessions and forgets their clipboard text.
pub fn spawn_idle_sweeper(
    store: SessionStore,
    clipboard: Arc<dyn Clipboard>,
    ttl: Duration,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let evicted = store.evict_idle(ttl).await;
            if evicted.is_empty() {
                continue;
            }
            for id in &evicted {
                clipboard.forget(*id);
                debug!("Session {id} expired");
            }
            info!("Evicted {} idle session(s)", evicted.len());
        }
    })
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::copy::MemoryClipboard;
    use crate::panels::Tab;

    #[tokio::test]
    async fn test_create_read_remove() {
        let store = SessionStore::default();
        let id = store.create().await;

        let tab = store.read(id, |w| w.active()).await.unwrap();
        assert_eq!(tab, Tab::Profile);
        assert_eq!(store.count().await, 1);

        assert!(store.remove(id).await);
        assert!(!store.remove(id).await);
        assert!(matches!(
            store.read(id, |w| w.active()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::default();
        let a = store.create().await;
        let b = store.create().await;

        store
            .update(a, |w| {
                w.select(Tab::Chat);
                Ok(())
            })
            .await
            .unwrap();

        assert_eq!(store.read(a, |w| w.active()).await.unwrap(), Tab::Chat);
        assert_eq!(store.read(b, |w| w.active()).await.unwrap(), Tab::Profile);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evict_idle_spares_recently_used() {
        let store = SessionStore::default();
        let idle = store.create().await;
        let busy = store.create().await;

        tokio::time::advance(Duration::from_secs(20)).await;
        store.read(busy, |_| ()).await.unwrap();
        tokio::time::advance(Duration::from_secs(10)).await;

        let evicted = store.evict_idle(Duration::from_secs(30)).await;
        assert_eq!(evicted, vec![idle]);
        assert!(store.read(busy, |_| ()).await.is_ok());
        assert!(matches!(
            store.read(idle, |_| ()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_evicts_after_ttl() {
        let store = SessionStore::default();
        let clipboard: Arc<dyn Clipboard> = Arc::new(MemoryClipboard::default());
        let id = store.create().await;
        clipboard.write_text(id, "saved").unwrap();

        let sweeper = spawn_idle_sweeper(
            store.clone(),
            clipboard.clone(),
            Duration::from_secs(60),
            Duration::from_secs(10),
        );

        tokio::time::sleep(Duration::from_secs(55)).await;
        assert_eq!(store.count().await, 1);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(store.count().await, 0);
        assert_eq!(clipboard.read_text(id).unwrap(), None);

        sweeper.abort();
    }

    #[tokio::test]
    async fn test_update_unknown_session() {
        let store = SessionStore::default();
        let result = store.update(Uuid::new_v4(), |_| Ok(())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
