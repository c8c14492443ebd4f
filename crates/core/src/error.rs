//! Error types for the Docfold pipeline.
//!
//! Uses `thiserror` for ergonomic error definitions. Each bounded context
//! has its own error enum; nothing here is fatal to the host process — every
//! failure mode degrades to fewer or shorter documents in context.

use thiserror::Error;

/// The top-level error type for pipeline operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Extraction errors ---
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    // --- Repository errors ---
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    // --- Formatting errors ---
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Text extraction failed for one uploaded file. Surfaced per file and never
/// aborts a batch.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Extractor failed: {0}")]
    Failed(String),
}

/// The backing document store failed or did not answer in time. Recovered
/// inside the cache as a stale-or-empty read.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Fetch timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Document not found: {0}")]
    NotFound(String),
}

/// A single document record could not be rendered. Caught per document by
/// the assembler; the document is skipped.
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    #[error("Document {id} has no usable text content")]
    EmptyContent { id: String },
}
