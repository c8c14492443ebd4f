//! Pipeline configuration.
//!
//! Loaded from a TOML file with per-field defaults, so an empty or missing
//! file yields the stock pipeline:
//!
//! ```toml
//! [chunking]
//! min_tokens = 200
//! max_tokens = 400
//!
//! [cache]
//! ttl_secs = 300
//! fetch_timeout_secs = 10
//!
//! [context]
//! max_total_tokens = 10000
//! max_tokens_per_doc = 3000
//! ```

use docfold_context::ContextBudget;
use docfold_ingest::ChunkerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cache timing knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Freshness window for the cached document set, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Deadline for one repository fetch, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_ttl_secs() -> u64 {
    300
}
fn default_fetch_timeout_secs() -> u64 {
    10
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

/// The root pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Chunk packing bounds.
    #[serde(default)]
    pub chunking: ChunkerConfig,

    /// Cache timing.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Context assembly budgets.
    #[serde(default)]
    pub context: ContextBudget,
}

impl PipelineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&contents)?)
    }
}
