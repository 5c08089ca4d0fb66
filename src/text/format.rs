//! Emphasis pass: **bold** and 'italic' spans.

use std::sync::OnceLock;

use regex::Regex;

use super::Segment;

const BOLD_DELIMITER: &str = "**";
const ITALIC_DELIMITER: &str = "'";

/// Bold is tried before italic at each position; both take the nearest closer.
static EMPHASIS_PATTERN: OnceLock<Regex> = OnceLock::new();

fn emphasis_pattern() -> &'static Regex {
    EMPHASIS_PATTERN.get_or_init(|| {
        Regex::new(r"(?s)\*\*.*?\*\*|'.*?'").expect("emphasis pattern is valid")
    })
}

/// True when `text` holds at least one complete bold or italic delimiter pair.
pub(crate) fn has_formatting(text: &str) -> bool {
    emphasis_pattern().is_match(text)
}

/// Split text into plain, bold and italic segments, left to right.
///
/// Delimiters of matched spans are dropped; a delimiter without a closer of
/// its own kind stays in the surrounding plain text. Spans with nothing
/// between their delimiters produce no segment.
pub(crate) fn split_formatting(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for span in emphasis_pattern().find_iter(text) {
        if span.start() > last {
            segments.push(Segment::PlainText {
                content: &text[last..span.start()],
            });
        }
        let raw = span.as_str();
        let segment = if raw.starts_with(BOLD_DELIMITER) {
            Segment::Bold {
                content: &raw[BOLD_DELIMITER.len()..raw.len() - BOLD_DELIMITER.len()],
            }
        } else {
            Segment::Italic {
                content: &raw[ITALIC_DELIMITER.len()..raw.len() - ITALIC_DELIMITER.len()],
            }
        };
        if !segment.content().is_empty() {
            segments.push(segment);
        }
        last = span.end();
    }
    if last < text.len() {
        segments.push(Segment::PlainText {
            content: &text[last..],
        });
    }
    segments
}
