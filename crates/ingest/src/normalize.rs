//! Whitespace cleanup applied to extracted text before chunking.

/// Normalize extractor output: CRLF becomes LF, runs of spaces and tabs
/// collapse to one space, runs of three or more newlines collapse to a blank
/// line, and the result is trimmed.
pub fn normalize_whitespace(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len());
    let mut newline_run = 0usize;
    let mut pending_space = false;

    for c in unified.chars() {
        match c {
            '\n' => {
                newline_run += 1;
                pending_space = false;
            }
            ' ' | '\t' => {
                pending_space = true;
            }
            _ => {
                if newline_run > 0 {
                    out.push('\n');
                    if newline_run >= 2 {
                        out.push('\n');
                    }
                    newline_run = 0;
                } else if pending_space {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
        }
    }

    out.trim().to_string()
}
