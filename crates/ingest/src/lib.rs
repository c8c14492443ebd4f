//! Document ingestion for Docfold.
//!
//! The path from raw upload bytes to a persisted-ready record:
//!
//! 1. **Extract** text via the [`TextExtractor`](docfold_core::TextExtractor) collaborator
//! 2. **Clean** whitespace ([`normalize_whitespace`])
//! 3. **Chunk** into token-bounded, sentence-aligned pieces ([`chunk`])
//! 4. **Assemble** the [`Document`](docfold_core::Document) record
//!
//! Batch uploads run sequentially and report per-file outcomes.

pub mod chunker;
pub mod ingestor;
pub mod normalize;
pub mod plain_text;
pub mod sentence;
pub mod token;

pub use chunker::{chunk, ChunkerConfig};
pub use ingestor::{BatchReport, DocumentIngestor, FailedFile, UploadFile};
pub use normalize::normalize_whitespace;
pub use plain_text::PlainTextExtractor;
pub use sentence::split_sentences;
pub use token::estimate_tokens;
