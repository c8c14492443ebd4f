//! Plain-text extractor — the reference `TextExtractor` implementation.
//!
//! Decodes upload bytes as UTF-8 and nothing else. Binary formats (PDF,
//! DOCX, ...) stay behind host-provided extractors.

use async_trait::async_trait;
use docfold_core::error::ExtractionError;
use docfold_core::extractor::{ExtractedText, TextExtractor};

/// Extractor for plain UTF-8 text uploads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &str {
        "plain_text"
    }

    async fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ExtractionError::Malformed(format!("invalid UTF-8: {e}")))?;
        Ok(ExtractedText {
            text: text.to_string(),
            num_pages: None,
            metadata: serde_json::Value::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn extracts_utf8_text() {
        let extracted = PlainTextExtractor.extract(b"plain words").await.unwrap();
        assert_eq!(extracted.text, "plain words");
        assert_eq!(extracted.num_pages, None);
        assert!(extracted.metadata.is_null());
    }

    #[tokio::test]
    async fn rejects_invalid_utf8() {
        let err = PlainTextExtractor.extract(&[0xff, 0xfe, 0x00]).await.unwrap_err();
        assert!(err.to_string().contains("invalid UTF-8"));
    }
}
