//! Application run modes: logger init, segmenting one description, rendering a tip store.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use serde::Serialize;

use crate::cli::{Args, OutputFormat};
use crate::core::config::{self, Language};
use crate::core::{highlights, tips};
use crate::render;
use crate::text::{self, KeywordHighlight, Segment};

/// Initialize env_logger on stderr so stdout stays machine-readable.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Styling applies only on a terminal without NO_COLOR.
fn use_color() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Read the description from the argument, or stdin when it is absent or `-`.
fn read_text(text: Option<String>) -> io::Result<String> {
    match text {
        Some(t) if t != "-" => Ok(t),
        _ => {
            let input = io::read_to_string(io::stdin())?;
            Ok(input.strip_suffix('\n').unwrap_or(&input).to_string())
        }
    }
}

/// Run `segment`: one description, highlights from -k pairs then the highlights file.
pub fn run_segment(
    text: Option<String>,
    keywords: &[String],
    highlights_file: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut list: Vec<KeywordHighlight> = keywords
        .iter()
        .map(|k| highlights::parse_pair(k))
        .collect::<Result<_, _>>()?;
    if let Some(path) = highlights_file {
        list.extend(highlights::load_file(path)?);
    }
    highlights::validate(&list)?;

    let description = read_text(text)?;
    let segments = text::segment(&description, &list);
    log::info!(
        "{} segments from {} highlights",
        segments.len(),
        list.len()
    );

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &segments)?;
            writeln!(out)?;
        }
        OutputFormat::Styled | OutputFormat::Plain => {
            let color = format == OutputFormat::Styled && use_color();
            render::write_description(&mut out, &render::description_line(&segments), color)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct SegmentedTip<'a> {
    id: &'a str,
    title: &'a str,
    category: &'a str,
    votes: i64,
    /// Description with emphasis delimiters removed.
    text: String,
    segments: Vec<Segment<'a>>,
}

/// Run `tips`: load the store, keep visible tips unless `all`, sort by votes, render each.
pub fn run_tips(
    lang: Option<Language>,
    data_dir: Option<&Path>,
    all: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load()?;
    let language = lang.unwrap_or(config.language);
    let data_dir = data_dir.unwrap_or(config.data_dir.as_path());
    let path = tips::tips_path(data_dir, language);

    let mut loaded = tips::load(&path)?;
    if !all {
        loaded = tips::visible(loaded);
    }
    tips::sort_by_votes(&mut loaded);
    log::info!("{} tips from {}", loaded.len(), path.display());

    let mut out = io::stdout().lock();
    if format == OutputFormat::Json {
        let segmented: Vec<SegmentedTip<'_>> = loaded
            .iter()
            .map(|tip| {
                let segments = text::segment(&tip.description, &tip.highlights);
                SegmentedTip {
                    id: &tip.id,
                    title: &tip.title,
                    category: &tip.category,
                    votes: tip.votes,
                    text: render::plain_text(&segments),
                    segments,
                }
            })
            .collect();
        serde_json::to_writer_pretty(&mut out, &segmented)?;
        writeln!(out)?;
        return Ok(());
    }

    let color = format == OutputFormat::Styled && use_color();
    for (i, tip) in loaded.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} [{}] ({} votes)", tip.title, tip.category, tip.votes)?;
        let segments = text::segment(&tip.description, &tip.highlights);
        render::write_description(&mut out, &render::description_line(&segments), color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_text_uses_argument() {
        assert_eq!(read_text(Some("hello".into())).expect("text"), "hello");
    }
}
