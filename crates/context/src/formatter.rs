//! Per-document block rendering.
//!
//! One document becomes one delimited block carrying its name, type, page
//! count, and token estimate, with the body truncated to an optional token
//! budget. The assembler stacks these blocks and enforces the global budget.

use docfold_core::document::Document;
use docfold_core::error::FormatError;
use docfold_ingest::estimate_tokens;

/// Appended to any text cut off by a token budget.
pub const TRUNCATION_MARKER: &str = "... [truncated]";

/// Sentinel for numeric attributes the document does not carry.
const ABSENT: &str = "N/A";

/// Render one document as a delimited context block.
///
/// The body comes from
/// [`DocumentContent::resolve_text`](docfold_core::DocumentContent::resolve_text);
/// a document with no usable text is a [`FormatError`] so the assembler can
/// skip it. With `max_tokens` set, an over-budget body is cut to
/// `max_tokens * 4` characters and marked.
pub fn format_document(doc: &Document, max_tokens: Option<usize>) -> Result<String, FormatError> {
    let resolved = doc.content.resolve_text();
    if resolved.trim().is_empty() {
        return Err(FormatError::EmptyContent { id: doc.id.clone() });
    }

    let mut body = resolved;
    let mut truncated = false;
    if let Some(budget) = max_tokens {
        if estimate_tokens(&body) > budget {
            body = truncate_to_boundary(&body, budget * 4).to_string();
            truncated = true;
        }
    }

    let pages = doc
        .num_pages
        .map(|p| p.to_string())
        .unwrap_or_else(|| ABSENT.to_string());
    let marker = if truncated { TRUNCATION_MARKER } else { "" };

    Ok(format!(
        "<document name=\"{}\" type=\"{}\" pages=\"{}\" tokens=\"{}\">\n{}{}\n</document>",
        doc.file_name, doc.file_type, pages, doc.total_tokens, body, marker
    ))
}

/// Cut `text` to at most `max_bytes`, backing up to the nearest char
/// boundary.
pub(crate) fn truncate_to_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
