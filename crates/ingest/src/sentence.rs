//! Sentence segmentation.
//!
//! Splits on runs of `.`, `!`, `?`, keeping the delimiter run attached to
//! the segment it ends. This is deliberately lossy for abbreviations and
//! decimals — an approximation the chunker tolerates, not a linguistic
//! boundary detector.

/// Split text into trimmed sentence segments.
///
/// Text with no delimiter at all comes back as a single segment, and a
/// trailing un-terminated remainder is kept as a final segment so content is
/// never discarded. Empty segments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut seg_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if is_delimiter(c) {
            // End the segment only once the delimiter run finishes, so
            // "Wait..." stays one segment.
            let run_continues = matches!(chars.peek(), Some(&(_, next)) if is_delimiter(next));
            if !run_continues {
                let end = i + c.len_utf8();
                push_trimmed(&mut segments, &text[seg_start..end]);
                seg_start = end;
            }
        }
    }

    if seg_start < text.len() {
        push_trimmed(&mut segments, &text[seg_start..]);
    }

    segments
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn push_trimmed(segments: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
}
