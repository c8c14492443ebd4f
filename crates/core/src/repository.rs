//! Document repository trait — the persistent store behind the cache.
//!
//! Reads go through `docfold-context`'s `DocumentCache`; writes go straight
//! to the repository and invalidate the cache. Implementations: in-memory
//! (`docfold-store`), host-owned persistent stores.

use async_trait::async_trait;

use crate::document::Document;
use crate::error::RepositoryError;

/// The backing document store.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// The repository name (e.g., "in_memory").
    fn name(&self) -> &str;

    /// Fetch every persisted document.
    async fn get_all(&self) -> Result<Vec<Document>, RepositoryError>;

    /// Persist a new document record.
    async fn add(&self, doc: Document) -> Result<(), RepositoryError>;

    /// Delete a document by id. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;
}
