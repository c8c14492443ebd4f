//! Document ingestion — extraction, cleaning, and chunking of uploads.
//!
//! One upload becomes one persisted-ready [`Document`]. Batches run
//! sequentially in input order; a failed file is recorded in the report and
//! never aborts the files after it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use docfold_core::clock::Clock;
use docfold_core::document::{Document, DocumentContent};
use docfold_core::error::ExtractionError;
use docfold_core::extractor::{FileMeta, TextExtractor};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::chunker::{chunk, ChunkerConfig};
use crate::normalize::normalize_whitespace;

/// One file in a batch upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Raw upload bytes.
    pub bytes: Vec<u8>,
    /// Caller-supplied file metadata.
    pub meta: FileMeta,
}

/// A file that failed ingestion, with the error that stopped it.
#[derive(Debug, Clone)]
pub struct FailedFile {
    pub name: String,
    pub error: ExtractionError,
}

/// Outcome of a batch upload. File order from the input is preserved in
/// both `documents` and `failed_files`.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of files ingested successfully.
    pub success_count: usize,
    /// The ingested documents, in input order.
    pub documents: Vec<Document>,
    /// Per-file failures, in input order.
    pub failed_files: Vec<FailedFile>,
}

/// Orchestrates extraction, cleaning, and chunking for uploads.
pub struct DocumentIngestor {
    extractor: Arc<dyn TextExtractor>,
    clock: Arc<dyn Clock>,
    chunker: ChunkerConfig,
}

impl DocumentIngestor {
    pub fn new(extractor: Arc<dyn TextExtractor>, clock: Arc<dyn Clock>) -> Self {
        Self {
            extractor,
            clock,
            chunker: ChunkerConfig::default(),
        }
    }

    /// Override the default chunking bounds.
    pub fn with_chunker_config(mut self, config: ChunkerConfig) -> Self {
        self.chunker = config;
        self
    }

    /// Ingest one upload into a persisted-ready document record.
    ///
    /// Extraction failures propagate with the extractor's message intact.
    /// The record is not persisted here.
    pub async fn ingest(
        &self,
        bytes: &[u8],
        meta: &FileMeta,
    ) -> Result<Document, ExtractionError> {
        let extracted = self.extractor.extract(bytes).await?;
        let text = normalize_whitespace(&extracted.text);
        let chunks = chunk(&text, &self.chunker);
        let total_tokens = chunks.iter().map(|c| c.tokens).sum();

        debug!(
            file = %meta.file_name,
            chunks = chunks.len(),
            total_tokens,
            "Ingested document"
        );

        Ok(Document {
            id: Uuid::new_v4().to_string(),
            file_name: meta.file_name.clone(),
            file_size: meta.file_size,
            file_type: meta.file_type.clone(),
            num_pages: extracted.num_pages,
            chunk_count: chunks.len(),
            content: DocumentContent::Chunked(chunks),
            total_tokens,
            metadata: extracted.metadata,
            created_at: self.now(),
        })
    }

    /// Ingest a batch of uploads sequentially, in input order.
    ///
    /// Each file succeeds or fails on its own; the report carries both sides.
    pub async fn ingest_batch(&self, files: &[UploadFile]) -> BatchReport {
        let mut report = BatchReport::default();

        for file in files {
            match self.ingest(&file.bytes, &file.meta).await {
                Ok(doc) => {
                    report.success_count += 1;
                    report.documents.push(doc);
                }
                Err(error) => {
                    warn!(file = %file.meta.file_name, %error, "File failed ingestion");
                    report.failed_files.push(FailedFile {
                        name: file.meta.file_name.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            total = files.len(),
            succeeded = report.success_count,
            failed = report.failed_files.len(),
            "Batch ingestion finished"
        );
        report
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docfold_core::clock::SystemClock;
    use docfold_core::extractor::ExtractedText;

    use crate::plain_text::PlainTextExtractor;

    /// Extractor that fails for file contents containing a marker byte
    /// sequence, standing in for a corrupt upload.
    struct CorruptAwareExtractor;

    #[async_trait]
    impl TextExtractor for CorruptAwareExtractor {
        fn name(&self) -> &str {
            "corrupt_aware"
        }

        async fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
            if bytes.starts_with(b"CORRUPT") {
                return Err(ExtractionError::Malformed("unreadable stream".into()));
            }
            PlainTextExtractor.extract(bytes).await
        }
    }

    fn meta(name: &str, size: u64) -> FileMeta {
        FileMeta {
            file_name: name.into(),
            file_size: size,
            file_type: "txt".into(),
        }
    }

    fn ingestor() -> DocumentIngestor {
        DocumentIngestor::new(Arc::new(CorruptAwareExtractor), Arc::new(SystemClock))
            .with_chunker_config(ChunkerConfig {
                min_tokens: 5,
                max_tokens: 10,
            })
    }

    #[tokio::test]
    async fn ingest_produces_chunked_document() {
        let text = b"First sentence of the upload. Second sentence follows here. Third one closes it.";
        let doc = ingestor().ingest(text, &meta("notes.txt", text.len() as u64)).await.unwrap();

        assert!(!doc.id.is_empty());
        assert_eq!(doc.file_name, "notes.txt");
        assert!(doc.chunk_count > 0);
        assert_eq!(doc.chunk_count, doc.content.chunk_count());
        let DocumentContent::Chunked(chunks) = &doc.content else {
            panic!("expected chunked content");
        };
        let sum: usize = chunks.iter().map(|c| c.tokens).sum();
        assert_eq!(doc.total_tokens, sum);
    }

    #[tokio::test]
    async fn ingest_normalizes_whitespace_before_chunking() {
        let doc = ingestor()
            .ingest(b"Messy   spacing here.\r\n\r\n\r\n\r\nNext paragraph now.", &meta("messy.txt", 10))
            .await
            .unwrap();
        let text = doc.content.resolve_text();
        assert!(text.contains("Messy spacing here."));
        assert!(!text.contains("  "));
        assert!(!text.contains('\r'));
    }

    #[tokio::test]
    async fn extraction_failure_propagates_message() {
        let err = ingestor().ingest(b"CORRUPT data", &meta("bad.pdf", 12)).await.unwrap_err();
        assert!(err.to_string().contains("unreadable stream"));
    }

    #[tokio::test]
    async fn batch_continues_past_a_failed_file() {
        let files = vec![
            UploadFile {
                bytes: b"Good file one. It has sentences.".to_vec(),
                meta: meta("good.pdf", 32),
            },
            UploadFile {
                bytes: b"CORRUPT stream".to_vec(),
                meta: meta("corrupt.pdf", 14),
            },
            UploadFile {
                bytes: b"Good file two. Also fine.".to_vec(),
                meta: meta("good2.pdf", 25),
            },
        ];

        let report = ingestor().ingest_batch(&files).await;

        assert_eq!(report.success_count, 2);
        assert_eq!(report.failed_files.len(), 1);
        assert_eq!(report.failed_files[0].name, "corrupt.pdf");
        // Input order preserved: good2.pdf was processed despite the failure.
        assert_eq!(report.documents[0].file_name, "good.pdf");
        assert_eq!(report.documents[1].file_name, "good2.pdf");
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_report() {
        let report = ingestor().ingest_batch(&[]).await;
        assert_eq!(report.success_count, 0);
        assert!(report.documents.is_empty());
        assert!(report.failed_files.is_empty());
    }
}
