//! Terminal rendering of segmented descriptions: styled spans plus numbered
//! footnotes carrying each highlight's info.

use std::io::{self, Write};

use crossterm::style::{self as term, Attribute, ContentStyle, StyledContent};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::text::Segment;

/// Highlight accent, a soft violet (#C39BFF).
pub(crate) const HIGHLIGHT_ACCENT: Color = Color::Rgb(195, 155, 255);

/// A description ready for display: one styled line and the highlight notes it references.
#[derive(Debug, Clone, Default)]
pub(crate) struct RenderedDescription {
    pub line: Line<'static>,
    /// `(keyword, info)` for footnote `[n]`, where n is the index + 1.
    pub notes: Vec<(String, String)>,
}

/// Map segments to styled spans. Each highlight is followed by a dim `[n]` marker.
pub(crate) fn description_line(segments: &[Segment<'_>]) -> RenderedDescription {
    let mut spans = Vec::with_capacity(segments.len());
    let mut notes = Vec::new();
    for segment in segments {
        match segment {
            Segment::PlainText { content } => spans.push(Span::raw(content.to_string())),
            Segment::Bold { content } => spans.push(Span::styled(
                content.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Segment::Italic { content } => spans.push(Span::styled(
                content.to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Segment::Highlight { content, info } => {
                notes.push((content.to_string(), info.to_string()));
                spans.push(Span::styled(
                    content.to_string(),
                    Style::default()
                        .fg(HIGHLIGHT_ACCENT)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                spans.push(Span::styled(
                    format!("[{}]", notes.len()),
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
        }
    }
    RenderedDescription {
        line: Line::from(spans),
        notes,
    }
}

/// Concatenated segment contents: the description with emphasis delimiters removed.
pub(crate) fn plain_text(segments: &[Segment<'_>]) -> String {
    segments.iter().map(|s| s.content()).collect()
}

/// Write a rendered description and its footnotes. Styling is emitted only when `color` is set.
pub(crate) fn write_description(
    out: &mut impl Write,
    rendered: &RenderedDescription,
    color: bool,
) -> io::Result<()> {
    write_line(out, &rendered.line, color)?;
    for (i, (keyword, info)) in rendered.notes.iter().enumerate() {
        writeln!(out, "  [{}] {}: {}", i + 1, keyword, info)?;
    }
    Ok(())
}

/// Write one line of spans followed by a newline.
pub(crate) fn write_line(out: &mut impl Write, line: &Line<'_>, color: bool) -> io::Result<()> {
    for span in &line.spans {
        if color {
            write!(
                out,
                "{}",
                StyledContent::new(content_style(span.style), span.content.as_ref())
            )?;
        } else {
            write!(out, "{}", span.content)?;
        }
    }
    writeln!(out)
}

/// Translate a ratatui style into the crossterm style used for direct printing.
fn content_style(style: Style) -> ContentStyle {
    let mut out = ContentStyle::new();
    if let Some(Color::Rgb(r, g, b)) = style.fg {
        out.foreground_color = Some(term::Color::Rgb { r, g, b });
    }
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::DIM, Attribute::Dim),
    ] {
        if style.add_modifier.contains(modifier) {
            out.attributes.set(attribute);
        }
    }
    out
}
