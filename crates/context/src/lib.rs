//! Context assembly for Docfold.
//!
//! Three pieces sit between the persisted document set and the AI request:
//!
//! - [`DocumentCache`] — TTL cache over the repository with bounded-latency
//!   fetches
//! - [`format_document`] — one document rendered as one delimited block
//! - [`assemble_all`] — equal-share budget allocation across documents plus
//!   the global ceiling
//!
//! All failure modes degrade to fewer or shorter documents in the output;
//! nothing here blocks the request path.

pub mod assembler;
pub mod cache;
pub mod formatter;

pub use assembler::{assemble_all, ContextBudget};
pub use cache::{DocumentCache, DEFAULT_FETCH_TIMEOUT, DEFAULT_TTL};
pub use formatter::{format_document, TRUNCATION_MARKER};
