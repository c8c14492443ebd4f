//! Process-wide TTL cache over the document repository.
//!
//! One cache instance fronts all reads of the persisted document set. The
//! repository and clock are injected, so there is no hidden global state and
//! tests can move time by hand. The single entry is replaced wholesale:
//! a new entry is built completely before it is assigned to the shared slot,
//! so readers observe either the previous entry or the new one, never a
//! partial write.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use docfold_core::clock::Clock;
use docfold_core::document::Document;
use docfold_core::repository::DocumentRepository;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// How long a fetched document set stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// How long a repository fetch may run before it is abandoned.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

struct CacheEntry {
    documents: Vec<Document>,
    fetched_at: DateTime<Utc>,
}

/// TTL cache with bounded-latency fetches.
///
/// A fetch that fails or times out is logged and answered from the previous
/// entry when one exists — a transient fault never erases valid cached
/// state. With no previous entry the caller legitimately gets an empty set.
pub struct DocumentCache {
    repository: Arc<dyn DocumentRepository>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    fetch_timeout: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl DocumentCache {
    pub fn new(repository: Arc<dyn DocumentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            ttl: DEFAULT_TTL,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            entry: RwLock::new(None),
        }
    }

    /// Override the freshness window.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the fetch deadline.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Return all documents, from cache when fresh.
    ///
    /// `force_refresh` skips the freshness check and always contacts the
    /// repository.
    pub async fn get_all(&self, force_refresh: bool) -> Vec<Document> {
        if !force_refresh {
            let guard = self.entry.read().await;
            if let Some(entry) = guard.as_ref() {
                if self.is_fresh(entry) {
                    debug!(documents = entry.documents.len(), "Cache hit");
                    return entry.documents.clone();
                }
            }
        }

        match tokio::time::timeout(self.fetch_timeout, self.repository.get_all()).await {
            Ok(Ok(documents)) => {
                let entry = CacheEntry {
                    documents: documents.clone(),
                    fetched_at: self.clock.now(),
                };
                *self.entry.write().await = Some(entry);
                debug!(documents = documents.len(), "Cache refreshed");
                documents
            }
            Ok(Err(error)) => {
                warn!(%error, "Document fetch failed; serving previous cached state");
                self.previous().await
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.fetch_timeout.as_secs(),
                    "Document fetch timed out; serving previous cached state"
                );
                self.previous().await
            }
        }
    }

    /// Drop the cached entry; the next read hits the repository regardless
    /// of TTL.
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
        debug!("Cache invalidated");
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        let elapsed = self.clock.now().signed_duration_since(entry.fetched_at);
        elapsed.num_milliseconds() < self.ttl.as_millis() as i64
    }

    async fn previous(&self) -> Vec<Document> {
        self.entry
            .read()
            .await
            .as_ref()
            .map(|e| e.documents.clone())
            .unwrap_or_default()
    }
}
