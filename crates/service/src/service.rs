//! The `DocumentService` facade.
//!
//! Everything the host calls lives here: ingest uploads, read the document
//! set through the cache, delete records, and build the bounded context
//! string for an AI request.

use std::sync::Arc;
use std::time::Duration;

use docfold_context::{assemble_all, ContextBudget, DocumentCache};
use docfold_core::clock::Clock;
use docfold_core::document::Document;
use docfold_core::error::Result;
use docfold_core::extractor::{FileMeta, TextExtractor};
use docfold_core::repository::DocumentRepository;
use docfold_ingest::{BatchReport, DocumentIngestor, UploadFile};
use serde::Serialize;
use tracing::debug;

use crate::config::PipelineConfig;

/// Aggregate statistics over the persisted document set.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub count: usize,
    pub total_pages: u64,
    pub total_tokens: usize,
    /// Distinct file types, in first-seen order.
    pub types: Vec<String>,
    pub file_names: Vec<String>,
}

/// The pipeline facade: ingestion, cached reads, and context building.
pub struct DocumentService {
    ingestor: DocumentIngestor,
    cache: DocumentCache,
    repository: Arc<dyn DocumentRepository>,
    budget: ContextBudget,
}

impl DocumentService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        repository: Arc<dyn DocumentRepository>,
        clock: Arc<dyn Clock>,
        config: PipelineConfig,
    ) -> Self {
        let ingestor = DocumentIngestor::new(extractor, Arc::clone(&clock))
            .with_chunker_config(config.chunking);
        let cache = DocumentCache::new(Arc::clone(&repository), clock)
            .with_ttl(Duration::from_secs(config.cache.ttl_secs))
            .with_fetch_timeout(Duration::from_secs(config.cache.fetch_timeout_secs));
        Self {
            ingestor,
            cache,
            repository,
            budget: config.context,
        }
    }

    /// Ingest one upload, persist it, and invalidate the cached set.
    pub async fn ingest_document(&self, bytes: &[u8], meta: &FileMeta) -> Result<Document> {
        let doc = self.ingestor.ingest(bytes, meta).await?;
        self.repository.add(doc.clone()).await?;
        self.cache.invalidate().await;
        Ok(doc)
    }

    /// Ingest a batch of uploads sequentially, persisting each success.
    ///
    /// Extraction failures land in the report per file and never stop the
    /// batch; a repository write failure does propagate — that is the
    /// store breaking, not one bad upload.
    pub async fn ingest_batch(&self, files: &[UploadFile]) -> Result<BatchReport> {
        let report = self.ingestor.ingest_batch(files).await;
        for doc in &report.documents {
            self.repository.add(doc.clone()).await?;
        }
        if report.success_count > 0 {
            self.cache.invalidate().await;
        }
        Ok(report)
    }

    /// All persisted documents, served from cache when fresh.
    pub async fn get_documents(&self, force_refresh: bool) -> Vec<Document> {
        self.cache.get_all(force_refresh).await
    }

    /// Drop the cached document set.
    pub async fn invalidate_cache(&self) {
        self.cache.invalidate().await;
    }

    /// Delete a persisted document. Returns whether a record was removed.
    pub async fn delete_document(&self, id: &str) -> Result<bool> {
        let removed = self.repository.delete(id).await?;
        if removed {
            self.cache.invalidate().await;
        }
        Ok(removed)
    }

    /// Build the bounded context string for an AI request.
    ///
    /// With no explicit documents the cached set is used; with no explicit
    /// budget the configured one applies.
    pub async fn build_context(
        &self,
        documents: Option<Vec<Document>>,
        budget: Option<ContextBudget>,
    ) -> String {
        let docs = match documents {
            Some(docs) => docs,
            None => self.get_documents(false).await,
        };
        assemble_all(&docs, budget.unwrap_or(self.budget))
    }

    /// Aggregate statistics over the cached document set.
    pub async fn summary(&self) -> DocumentSummary {
        let docs = self.get_documents(false).await;
        let mut types: Vec<String> = Vec::new();
        for doc in &docs {
            if !types.contains(&doc.file_type) {
                types.push(doc.file_type.clone());
            }
        }
        let summary = DocumentSummary {
            count: docs.len(),
            total_pages: docs.iter().map(|d| u64::from(d.num_pages.unwrap_or(0))).sum(),
            total_tokens: docs.iter().map(|d| d.total_tokens).sum(),
            types,
            file_names: docs.iter().map(|d| d.file_name.clone()).collect(),
        };
        debug!(count = summary.count, tokens = summary.total_tokens, "Computed document summary");
        summary
    }

    /// Whether any documents are persisted.
    pub async fn has_documents(&self) -> bool {
        !self.get_documents(false).await.is_empty()
    }
}
