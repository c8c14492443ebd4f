//! Core domain types and collaborator traits for the Docfold pipeline.
//!
//! Docfold turns uploaded long-form documents into bounded, retrieval-ready
//! text blocks for injection into AI requests. This crate holds the records
//! the pipeline passes around ([`Document`], [`Chunk`]), the error taxonomy,
//! and the traits at the seams to external collaborators: text extraction,
//! the document store, and the clock.

pub mod clock;
pub mod document;
pub mod error;
pub mod extractor;
pub mod repository;

pub use clock::{Clock, SystemClock};
pub use document::{Chunk, Document, DocumentContent};
pub use error::{Error, ExtractionError, FormatError, RepositoryError, Result};
pub use extractor::{ExtractedText, FileMeta, TextExtractor};
pub use repository::DocumentRepository;
