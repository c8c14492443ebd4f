//! In-memory repository — useful for testing and ephemeral sessions.

use async_trait::async_trait;
use docfold_core::document::Document;
use docfold_core::error::RepositoryError;
use docfold_core::repository::DocumentRepository;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A repository that keeps documents in a Vec. Useful for tests and
/// sessions where persistence isn't needed.
pub struct InMemoryRepository {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn get_all(&self) -> Result<Vec<Document>, RepositoryError> {
        Ok(self.documents.read().await.clone())
    }

    async fn add(&self, doc: Document) -> Result<(), RepositoryError> {
        self.documents.write().await.push(doc);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let mut documents = self.documents.write().await;
        let len_before = documents.len();
        documents.retain(|d| d.id != id);
        Ok(documents.len() < len_before)
    }
}
