//! Description segmentation: split a tip description into plain, bold, italic
//! and keyword-highlight segments for rendering.
//!
//! Two passes: [`format::split_formatting`] cuts the text at `**bold**` and
//! `'italic'` spans, then [`keywords::KeywordMatcher`] splits every resulting
//! segment around keyword occurrences. A keyword always wins over the
//! emphasis it sits in.

mod format;
mod keywords;

pub(crate) use format::split_formatting;
pub(crate) use keywords::KeywordMatcher;

use serde::{Deserialize, Serialize};

/// A keyword to detect in descriptions, with the text shown alongside each match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHighlight {
    pub keyword: String,
    pub info: String,
}

impl KeywordHighlight {
    pub fn new(keyword: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            info: info.into(),
        }
    }
}

/// One contiguous, typed piece of a rendered description. `content` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment<'a> {
    #[serde(rename = "text")]
    PlainText { content: &'a str },
    Bold { content: &'a str },
    Italic { content: &'a str },
    Highlight { content: &'a str, info: &'a str },
}

impl<'a> Segment<'a> {
    pub fn content(&self) -> &'a str {
        match self {
            Segment::PlainText { content }
            | Segment::Bold { content }
            | Segment::Italic { content }
            | Segment::Highlight { content, .. } => content,
        }
    }

    /// Same styling, different content. A highlight keeps its info.
    pub(crate) fn with_content(&self, content: &'a str) -> Segment<'a> {
        match self {
            Segment::PlainText { .. } => Segment::PlainText { content },
            Segment::Bold { .. } => Segment::Bold { content },
            Segment::Italic { .. } => Segment::Italic { content },
            Segment::Highlight { info, .. } => Segment::Highlight { content, info },
        }
    }
}

/// Split `text` into styled segments, resolving keyword highlights over emphasis.
///
/// Concatenating the returned contents gives `text` with matched `**`/`'`
/// delimiter pairs removed. Never fails; empty input yields no segments.
pub fn segment<'a>(text: &'a str, highlights: &'a [KeywordHighlight]) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    if highlights.is_empty() && !format::has_formatting(text) {
        return vec![Segment::PlainText { content: text }];
    }

    let formatted = split_formatting(text);
    let Some(matcher) = KeywordMatcher::new(highlights) else {
        return formatted;
    };

    let segments: Vec<Segment<'a>> = formatted
        .iter()
        .flat_map(|formatted_segment| matcher.inject(formatted_segment))
        .collect();
    log::trace!(
        "Segmented {} bytes into {} segments ({} highlights)",
        text.len(),
        segments.len(),
        highlights.len()
    );
    segments
}
