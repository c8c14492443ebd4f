//! Text extraction trait — the upstream collaborator that turns raw upload
//! bytes into text.
//!
//! Binary format decoding (PDF and friends) lives behind this trait and is
//! not implemented by the pipeline itself. Implementations: plain text (in
//! `docfold-ingest`), external decoders in the host.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Caller-supplied metadata for one uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMeta {
    /// Original file name, e.g. "report.pdf".
    pub file_name: String,

    /// Upload size in bytes.
    pub file_size: u64,

    /// File type hint — extension or MIME subtype.
    pub file_type: String,
}

/// The output of a successful extraction.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// Raw extracted text, before whitespace normalization.
    pub text: String,

    /// Page count, when the source format has pages.
    pub num_pages: Option<u32>,

    /// Format-specific metadata (title, author, ...); `Null` when absent.
    pub metadata: serde_json::Value,
}

/// The text extraction collaborator.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// The extractor name (e.g., "plain_text", "pdf").
    fn name(&self) -> &str;

    /// Extract text from raw upload bytes.
    async fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractionError>;
}
