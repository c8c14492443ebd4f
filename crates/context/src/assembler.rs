//! Multi-document budget allocation and final assembly.
//!
//! The global token budget is split equally across documents, capped per
//! document, and enforced once more on the combined output — the per-block
//! truncations use the same estimator, but independent rounding can still
//! drift past the global ceiling.

use docfold_core::document::Document;
use docfold_ingest::estimate_tokens;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::formatter::{format_document, truncate_to_boundary, TRUNCATION_MARKER};

/// Token budgets for one assembly pass.
///
/// A zero value is invalid and falls back to the default with a warning —
/// budget mistakes shorten context, they never block the request path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContextBudget {
    /// Ceiling for the combined output.
    #[serde(default = "default_max_total_tokens")]
    pub max_total_tokens: usize,

    /// Ceiling for any single document's block.
    #[serde(default = "default_max_tokens_per_doc")]
    pub max_tokens_per_doc: usize,
}

fn default_max_total_tokens() -> usize {
    10_000
}
fn default_max_tokens_per_doc() -> usize {
    3_000
}

impl Default for ContextBudget {
    fn default() -> Self {
        Self {
            max_total_tokens: default_max_total_tokens(),
            max_tokens_per_doc: default_max_tokens_per_doc(),
        }
    }
}

impl ContextBudget {
    fn validated(self) -> Self {
        let mut out = self;
        if out.max_total_tokens == 0 {
            warn!("max_total_tokens of 0 is invalid; using default");
            out.max_total_tokens = default_max_total_tokens();
        }
        if out.max_tokens_per_doc == 0 {
            warn!("max_tokens_per_doc of 0 is invalid; using default");
            out.max_tokens_per_doc = default_max_tokens_per_doc();
        }
        out
    }
}

/// Assemble every document into one budget-bounded context string.
///
/// Each document gets an equal share of the total budget, capped at
/// `max_tokens_per_doc`, so one huge document cannot starve the others.
/// Documents that fail to format are skipped; if none render, the result is
/// empty. A non-empty result is wrapped in a `<documents>` container and its
/// length is bounded by `max_total_tokens * 4` plus fixed marker overhead.
pub fn assemble_all(documents: &[Document], budget: ContextBudget) -> String {
    let budget = budget.validated();
    if documents.is_empty() {
        return String::new();
    }

    let per_doc = budget
        .max_tokens_per_doc
        .min(budget.max_total_tokens / documents.len())
        .max(1);

    let mut blocks = Vec::with_capacity(documents.len());
    for doc in documents {
        match format_document(doc, Some(per_doc)) {
            Ok(block) => blocks.push(block),
            Err(error) => {
                warn!(id = %doc.id, %error, "Skipping document during context assembly");
            }
        }
    }
    if blocks.is_empty() {
        return String::new();
    }

    let mut combined = blocks.join("\n\n");
    if estimate_tokens(&combined) > budget.max_total_tokens {
        let cut = truncate_to_boundary(&combined, budget.max_total_tokens * 4);
        combined = format!("{cut}{TRUNCATION_MARKER}");
    }

    debug!(
        documents = documents.len(),
        rendered = blocks.len(),
        per_doc_budget = per_doc,
        tokens = estimate_tokens(&combined),
        "Assembled document context"
    );
    format!("<documents>\n{combined}\n</documents>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docfold_core::document::DocumentContent;

    const WRAPPER_OVERHEAD: usize = "<documents>\n\n</documents>".len();

    fn doc_with_text(name: &str, text: String) -> Document {
        let tokens = estimate_tokens(&text);
        Document {
            id: format!("id_{name}"),
            file_name: name.into(),
            file_size: text.len() as u64,
            file_type: "txt".into(),
            num_pages: None,
            chunk_count: 0,
            total_tokens: tokens,
            content: DocumentContent::Full(text),
            metadata: serde_json::Value::Null,
            created_at: Utc::now(),
        }
    }

    fn doc_of_tokens(name: &str, tokens: usize) -> Document {
        doc_with_text(name, "wxyz".repeat(tokens))
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(assemble_all(&[], ContextBudget::default()), "");
    }

    #[test]
    fn single_document_is_wrapped() {
        let out = assemble_all(
            &[doc_with_text("a.txt", "Some document text.".into())],
            ContextBudget::default(),
        );
        assert!(out.starts_with("<documents>\n"));
        assert!(out.ends_with("\n</documents>"));
        assert!(out.contains("Some document text."));
        assert!(out.contains("name=\"a.txt\""));
    }

    #[test]
    fn equal_share_allocation_bounds_each_document() {
        // Two 2000-token documents under a 3000-token total: each gets
        // min(3000, 3000/2) = 1500 tokens.
        let docs = vec![doc_of_tokens("a.txt", 2000), doc_of_tokens("b.txt", 2000)];
        let budget = ContextBudget {
            max_total_tokens: 3000,
            max_tokens_per_doc: 3000,
        };
        let out = assemble_all(&docs, budget);

        // Both blocks were individually truncated to ~1500 tokens.
        assert!(out.matches(TRUNCATION_MARKER).count() >= 2);
        assert!(out.len() <= 3000 * 4 + TRUNCATION_MARKER.len() + WRAPPER_OVERHEAD);
    }

    #[test]
    fn output_length_is_bounded_by_total_budget() {
        let docs: Vec<Document> = (0..5)
            .map(|i| doc_of_tokens(&format!("doc{i}.txt"), 4000))
            .collect();
        let budget = ContextBudget {
            max_total_tokens: 1000,
            max_tokens_per_doc: 3000,
        };
        let out = assemble_all(&docs, budget);
        assert!(!out.is_empty());
        assert!(out.len() <= 1000 * 4 + TRUNCATION_MARKER.len() + WRAPPER_OVERHEAD);
    }

    #[test]
    fn unrenderable_documents_are_skipped_not_fatal() {
        let docs = vec![
            doc_with_text("empty.txt", String::new()),
            doc_with_text("good.txt", "Usable text here.".into()),
        ];
        let out = assemble_all(&docs, ContextBudget::default());
        assert!(out.contains("Usable text here."));
        assert!(!out.contains("empty.txt"));
    }

    #[test]
    fn all_unrenderable_yields_empty_output() {
        let docs = vec![doc_with_text("empty.txt", String::new())];
        assert_eq!(assemble_all(&docs, ContextBudget::default()), "");
    }

    #[test]
    fn zero_budgets_fall_back_to_defaults() {
        let docs = vec![doc_with_text("a.txt", "Fine text.".into())];
        let out = assemble_all(
            &docs,
            ContextBudget {
                max_total_tokens: 0,
                max_tokens_per_doc: 0,
            },
        );
        // Defaults applied: the small document renders untruncated.
        assert!(out.contains("Fine text."));
        assert!(!out.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn more_documents_than_budget_still_renders() {
        // total / count floors to 0; the per-document floor of 1 token keeps
        // every document represented.
        let docs: Vec<Document> = (0..8)
            .map(|i| doc_of_tokens(&format!("d{i}.txt"), 50))
            .collect();
        let budget = ContextBudget {
            max_total_tokens: 4,
            max_tokens_per_doc: 3000,
        };
        let out = assemble_all(&docs, budget);
        assert!(out.len() <= 4 * 4 + TRUNCATION_MARKER.len() + WRAPPER_OVERHEAD);
    }
}
