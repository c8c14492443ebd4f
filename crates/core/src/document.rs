//! Document and chunk records — the units the pipeline produces and consumes.
//!
//! A [`Document`] is created once at ingestion time and is immutable after
//! persistence. Its body is carried as a [`DocumentContent`] variant: either
//! the full extracted text or the chunked form produced by the chunker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A token-bounded slice of a document, aligned to sentence boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position within the document, contiguous from 0.
    pub index: usize,

    /// The chunk text (sentences joined with single spaces, trimmed).
    pub text: String,

    /// Estimated token count for `text`.
    pub tokens: usize,

    /// Number of sentence segments packed into this chunk.
    pub sentences: usize,
}

/// The body of a document: full text or the chunked representation.
///
/// Exactly one representation is carried per document. Callers that need
/// plain text go through [`DocumentContent::resolve_text`] so the two forms
/// stay interchangeable downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentContent {
    /// The extracted text, un-chunked.
    Full(String),

    /// Ordered chunks partitioning the extracted text.
    Chunked(Vec<Chunk>),
}

impl DocumentContent {
    /// Normalize to plain text: the full text as-is, or chunk texts joined
    /// with blank lines.
    pub fn resolve_text(&self) -> String {
        match self {
            Self::Full(text) => text.clone(),
            Self::Chunked(chunks) => chunks
                .iter()
                .map(|c| c.text.as_str())
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }

    /// Whether neither representation holds any text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Full(text) => text.is_empty(),
            Self::Chunked(chunks) => chunks.iter().all(|c| c.text.is_empty()),
        }
    }

    /// Number of chunks (0 for the full-text form).
    pub fn chunk_count(&self) -> usize {
        match self {
            Self::Full(_) => 0,
            Self::Chunked(chunks) => chunks.len(),
        }
    }
}

/// A persisted-ready document record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique id (UUID v4), assigned at ingestion.
    pub id: String,

    /// Original upload file name.
    pub file_name: String,

    /// Upload size in bytes.
    pub file_size: u64,

    /// File type hint — extension or MIME subtype, e.g. "pdf", "txt".
    pub file_type: String,

    /// Page count reported by the extractor, when it knows one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<u32>,

    /// The document body.
    pub content: DocumentContent,

    /// Number of chunks in `content` (0 for full-text documents).
    pub chunk_count: usize,

    /// Sum of estimated tokens across the body.
    pub total_tokens: usize,

    /// Extractor-provided metadata; `Null` when the extractor had none.
    #[serde(default)]
    pub metadata: serde_json::Value,

    /// When the document was ingested.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(index: usize, text: &str) -> Chunk {
        Chunk {
            index,
            text: text.into(),
            tokens: 1,
            sentences: 1,
        }
    }

    #[test]
    fn full_content_resolves_to_itself() {
        let content = DocumentContent::Full("The whole text.".into());
        assert_eq!(content.resolve_text(), "The whole text.");
        assert_eq!(content.chunk_count(), 0);
    }

    #[test]
    fn chunked_content_joins_with_blank_lines() {
        let content = DocumentContent::Chunked(vec![chunk(0, "First part."), chunk(1, "Second part.")]);
        assert_eq!(content.resolve_text(), "First part.\n\nSecond part.");
        assert_eq!(content.chunk_count(), 2);
    }

    #[test]
    fn emptiness_covers_both_forms() {
        assert!(DocumentContent::Full(String::new()).is_empty());
        assert!(DocumentContent::Chunked(vec![]).is_empty());
        assert!(!DocumentContent::Full("x".into()).is_empty());
    }

    #[test]
    fn document_round_trips_through_json() {
        let doc = Document {
            id: "doc_1".into(),
            file_name: "notes.txt".into(),
            file_size: 42,
            file_type: "txt".into(),
            num_pages: Some(3),
            content: DocumentContent::Full("Some notes.".into()),
            chunk_count: 0,
            total_tokens: 3,
            metadata: serde_json::json!({"author": "test"}),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.file_name, "notes.txt");
        assert_eq!(back.num_pages, Some(3));
        assert_eq!(back.content.resolve_text(), "Some notes.");
    }
}
