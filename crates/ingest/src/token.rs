//! Token estimation.
//!
//! Uses a character-based heuristic: ~4 characters per token. This is an
//! approximation, not a tokenizer — accurate within ~10% for BPE tokenizers
//! on English text. Every budget check in the pipeline goes through this one
//! function, so estimation error stays internally consistent instead of
//! compounding across components.

/// Estimate the token count for a string.
///
/// Heuristic: 1 token ≈ 4 characters. Rounds up. Empty input is 0 tokens.
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    text.len().div_ceil(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn four_chars_is_one_token() {
        assert_eq!(estimate_tokens("test"), 1);
    }

    #[test]
    fn five_chars_rounds_up() {
        assert_eq!(estimate_tokens("hello"), 2);
    }

    #[test]
    fn hundred_chars() {
        let text = "a".repeat(100);
        assert_eq!(estimate_tokens(&text), 25);
    }

    #[test]
    fn monotonic_in_length() {
        let mut prev = 0;
        for len in 0..64 {
            let tokens = estimate_tokens(&"x".repeat(len));
            assert!(tokens >= prev);
            prev = tokens;
        }
    }
}
