//! Document repository backends for Docfold.
//!
//! Persistent stores live in the host; this crate provides the in-process
//! implementation used by tests and ephemeral sessions.

pub mod in_memory;

pub use in_memory::InMemoryRepository;
