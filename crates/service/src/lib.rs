//! The Docfold facade.
//!
//! One [`DocumentService`] per process, built from the injected
//! collaborators (extractor, repository, clock) and a [`PipelineConfig`].
//! The host hands it raw upload bytes and gets back bounded context strings
//! for its AI requests; everything in between — cleaning, chunking, caching,
//! budget allocation — happens inside.

pub mod config;
pub mod service;

pub use config::{CacheConfig, PipelineConfig};
pub use service::{DocumentService, DocumentSummary};
