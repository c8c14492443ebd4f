//! Greedy bin-packing of sentences into token-bounded chunks.
//!
//! Sentences are packed in order into chunks of `min_tokens..=max_tokens`
//! estimated tokens, with one-step lookahead: a chunk already inside the
//! window closes early when the next sentence would push it over the top,
//! instead of waiting for the overflow on the next iteration.
//!
//! The chunker never splits inside a sentence. A single sentence whose own
//! estimate exceeds `max_tokens` becomes a chunk of its own, and a buffer
//! still below `min_tokens` accepts an overflowing sentence rather than
//! discarding it — overshoot is hard-capped at one sentence past the
//! maximum, because any buffer that crosses `max_tokens` flushes
//! immediately.

use docfold_core::Chunk;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sentence::split_sentences;
use crate::token::estimate_tokens;

/// Token bounds for chunk packing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Preferred lower bound per chunk. The tail chunk may fall below it.
    #[serde(default = "default_min_tokens")]
    pub min_tokens: usize,

    /// Upper bound per chunk, exceeded only by a single appended sentence.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

fn default_min_tokens() -> usize {
    200
}
fn default_max_tokens() -> usize {
    400
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            min_tokens: default_min_tokens(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Pack `text` into an ordered sequence of sentence-aligned chunks.
///
/// Empty or blank input yields no chunks.
pub fn chunk(text: &str, config: &ChunkerConfig) -> Vec<Chunk> {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Vec::new();
    }

    let mut chunks: Vec<Chunk> = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut buffer_tokens = 0usize;

    for (i, sentence) in sentences.iter().enumerate() {
        let tokens = estimate_tokens(sentence);

        // Overflow check before appending: close a chunk that already meets
        // the minimum. A buffer below the minimum keeps the sentence anyway
        // — size preference yields to not discarding content.
        if buffer_tokens + tokens > config.max_tokens
            && buffer_tokens >= config.min_tokens
        {
            flush(&mut chunks, &mut buffer, &mut buffer_tokens);
        }

        buffer.push(sentence);
        buffer_tokens += tokens;

        if buffer_tokens > config.max_tokens {
            // Hard cap on overshoot: the buffer crossed the maximum with the
            // sentence just appended, so it closes here.
            flush(&mut chunks, &mut buffer, &mut buffer_tokens);
        } else if buffer_tokens >= config.min_tokens {
            // Lookahead: close a good-sized chunk now if the next sentence
            // would overflow it.
            if let Some(next) = sentences.get(i + 1) {
                if buffer_tokens + estimate_tokens(next) > config.max_tokens {
                    flush(&mut chunks, &mut buffer, &mut buffer_tokens);
                }
            }
        }
    }

    // Tail remainder, whatever its size.
    flush(&mut chunks, &mut buffer, &mut buffer_tokens);

    debug!(
        chunks = chunks.len(),
        sentences = sentences.len(),
        "Packed text into chunks"
    );
    chunks
}

fn flush(chunks: &mut Vec<Chunk>, buffer: &mut Vec<&str>, buffer_tokens: &mut usize) {
    if buffer.is_empty() {
        return;
    }
    chunks.push(Chunk {
        index: chunks.len(),
        text: buffer.join(" "),
        tokens: *buffer_tokens,
        sentences: buffer.len(),
    });
    buffer.clear();
    *buffer_tokens = 0;
}
