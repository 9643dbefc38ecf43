//! Models for the upstream OCR service response.
//!
//! The OCR engine is an external collaborator that turns an uploaded
//! document into per-page markdown; only its response shape matters here.

use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, InvexError};

/// One page of OCR output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrPage {
    /// Zero-based page index.
    #[serde(default)]
    pub index: usize,

    /// Markdown rendition of the page.
    #[serde(default)]
    pub markdown: String,
}

/// Response from the OCR service: pages in document order plus the model
/// that produced them. Unknown response fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrResponse {
    /// Pages in document order.
    #[serde(default)]
    pub pages: Vec<OcrPage>,

    /// Model identifier reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl OcrResponse {
    /// Deserialize a raw JSON response body.
    pub fn from_json(json: &str) -> Result<Self, InvexError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Concatenate all page markdown, newline-joined, in page order.
    ///
    /// A response without pages cannot produce a document.
    pub fn joined_markdown(&self) -> Result<String, ExtractionError> {
        if self.pages.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        Ok(self
            .pages
            .iter()
            .map(|p| p.markdown.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Markdown of the first page, or the empty string.
    pub fn first_markdown(&self) -> &str {
        self.pages.first().map(|p| p.markdown.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_pages_in_order() {
        let response = OcrResponse {
            pages: vec![
                OcrPage {
                    index: 0,
                    markdown: "# Invoice".to_string(),
                },
                OcrPage {
                    index: 1,
                    markdown: "Page two".to_string(),
                },
            ],
            model: None,
        };

        assert_eq!(response.joined_markdown().unwrap(), "# Invoice\nPage two");
    }

    #[test]
    fn empty_page_list_is_an_empty_document() {
        let response = OcrResponse::default();
        assert_eq!(
            response.joined_markdown(),
            Err(ExtractionError::EmptyDocument)
        );
        assert_eq!(response.first_markdown(), "");
    }

    #[test]
    fn parses_a_service_response_with_unknown_fields() {
        let json = r##"{
            "pages": [{"index": 0, "markdown": "# Invoice", "images": [], "dimensions": {"dpi": 200}}],
            "model": "mistral-ocr-latest",
            "usage_info": {"pages_processed": 1}
        }"##;

        let response = OcrResponse::from_json(json).unwrap();
        assert_eq!(response.pages.len(), 1);
        assert_eq!(response.pages[0].markdown, "# Invoice");
        assert_eq!(response.model.as_deref(), Some("mistral-ocr-latest"));
    }
}
