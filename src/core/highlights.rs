//! Keyword highlight input: `KEYWORD=INFO` pairs and JSON highlight files.

use std::fs;
use std::path::Path;

use crate::text::KeywordHighlight;

/// Minimum info length accepted for a submitted highlight.
pub const MIN_INFO_CHARS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("Failed to read highlights file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid highlights JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected KEYWORD=INFO, got {0:?}")]
    Pair(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Parse `KEYWORD=INFO`, splitting at the first `=` so the info may contain more.
pub fn parse_pair(s: &str) -> Result<KeywordHighlight, HighlightError> {
    let (keyword, info) = s
        .split_once('=')
        .ok_or_else(|| HighlightError::Pair(s.to_string()))?;
    Ok(KeywordHighlight::new(keyword, info))
}

/// Load a JSON array of `{"keyword": ..., "info": ...}` objects.
pub fn load_file(path: &Path) -> Result<Vec<KeywordHighlight>, HighlightError> {
    let data = fs::read_to_string(path)?;
    let highlights: Vec<KeywordHighlight> = serde_json::from_str(&data)?;
    log::debug!("Loaded {} highlights from {}", highlights.len(), path.display());
    Ok(highlights)
}

/// Check every highlight has a keyword and an info of at least [`MIN_INFO_CHARS`] characters.
pub fn validate(highlights: &[KeywordHighlight]) -> Result<(), HighlightError> {
    for h in highlights {
        if h.keyword.is_empty() {
            return Err(HighlightError::Validation(format!(
                "empty keyword (info {:?})",
                h.info
            )));
        }
        if h.info.chars().count() < MIN_INFO_CHARS {
            return Err(HighlightError::Validation(format!(
                "info for {:?} must be at least {} characters",
                h.keyword, MIN_INFO_CHARS
            )));
        }
    }
    Ok(())
}
