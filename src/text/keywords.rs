//! Keyword pass: split segments around highlight keyword occurrences.

use regex::Regex;

use super::{KeywordHighlight, Segment};

/// Finds keyword occurrences left to right, all keywords at once.
///
/// At a given position the keyword listed first wins, even when a later one
/// is longer. Empty keywords never match.
pub(crate) struct KeywordMatcher<'a> {
    highlights: &'a [KeywordHighlight],
    strategy: Strategy,
}

enum Strategy {
    /// One alternation of every escaped keyword, in list order.
    Pattern(Regex),
    /// Direct scan, used when the alternation cannot be compiled.
    Scan,
}

impl<'a> KeywordMatcher<'a> {
    /// Build a matcher, or `None` when no highlight has a non-empty keyword.
    pub(crate) fn new(highlights: &'a [KeywordHighlight]) -> Option<Self> {
        let keywords: Vec<String> = highlights
            .iter()
            .filter(|h| !h.keyword.is_empty())
            .map(|h| regex::escape(&h.keyword))
            .collect();
        if keywords.is_empty() {
            return None;
        }
        let strategy = match Regex::new(&keywords.join("|")) {
            Ok(re) => Strategy::Pattern(re),
            Err(e) => {
                log::warn!(
                    "Keyword pattern for {} highlights not compiled ({}), scanning instead",
                    keywords.len(),
                    e
                );
                Strategy::Scan
            }
        };
        Some(Self {
            highlights,
            strategy,
        })
    }

    #[cfg(test)]
    pub(crate) fn scanning(highlights: &'a [KeywordHighlight]) -> Option<Self> {
        Self::new(highlights).map(|m| Self {
            strategy: Strategy::Scan,
            ..m
        })
    }

    /// Expand one segment: keyword occurrences become highlights, the text
    /// around them keeps the segment's own styling. Empty pieces are dropped.
    pub(crate) fn inject(&self, segment: &Segment<'a>) -> Vec<Segment<'a>> {
        let content = segment.content();
        let mut pieces = Vec::new();
        let mut last = 0;
        while let Some((start, highlight)) = self.find_at(content, last) {
            let end = start + highlight.keyword.len();
            if start > last {
                pieces.push(segment.with_content(&content[last..start]));
            }
            pieces.push(Segment::Highlight {
                content: &content[start..end],
                info: &highlight.info,
            });
            last = end;
        }
        if pieces.is_empty() {
            return vec![segment.clone()];
        }
        if last < content.len() {
            pieces.push(segment.with_content(&content[last..]));
        }
        pieces
    }

    /// Leftmost occurrence of any keyword at or after byte offset `from`.
    fn find_at(&self, haystack: &str, from: usize) -> Option<(usize, &'a KeywordHighlight)> {
        match &self.strategy {
            Strategy::Pattern(re) => {
                let found = re.find_at(haystack, from)?;
                let highlight = self.lookup(found.as_str())?;
                Some((found.start(), highlight))
            }
            Strategy::Scan => haystack[from..]
                .char_indices()
                .find_map(|(offset, _)| {
                    let rest = &haystack[from + offset..];
                    self.highlights
                        .iter()
                        .find(|h| !h.keyword.is_empty() && rest.starts_with(h.keyword.as_str()))
                        .map(|h| (from + offset, h))
                }),
        }
    }

    /// First highlight whose keyword is exactly `matched`.
    fn lookup(&self, matched: &str) -> Option<&'a KeywordHighlight> {
        self.highlights.iter().find(|h| h.keyword == matched)
    }
}
