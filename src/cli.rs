//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::core::config::Language;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  tip-segmenter segment \"Visit the **Louvre**\" -k \"Louvre=Art museum\"
  echo \"Say 'bonjour'\" | tip-segmenter segment --format styled
  tip-segmenter segment - --highlights highlights.json
  tip-segmenter tips --lang en             Render approved tips from data/tips-en.json
  tip-segmenter tips --all --format json   Segment every tip, including pending ones
  tip-segmenter completions bash           Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Split tip descriptions into bold, italic and keyword-highlight segments",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment one description
    Segment {
        /// Description text ('-' or omitted reads from stdin)
        text: Option<String>,
        /// Keyword highlight as KEYWORD=INFO (repeatable, kept in order)
        #[arg(short = 'k', long = "keyword", value_name = "KEYWORD=INFO")]
        keywords: Vec<String>,
        /// JSON file with an array of {"keyword", "info"} objects, applied after -k pairs
        #[arg(long, value_name = "FILE")]
        highlights: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Segment and display the tips of a tip store
    Tips {
        /// Store language (overrides TIP_SEGMENTER_LANG)
        #[arg(long, value_enum)]
        lang: Option<Language>,
        /// Directory holding tips-<lang>.json (overrides TIP_SEGMENTER_DATA_DIR)
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
        /// Include pending and rejected tips
        #[arg(long)]
        all: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Styled)]
        format: OutputFormat,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

/// How segments are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Segments as a JSON array
    Json,
    /// Terminal styling, when stdout is a terminal and NO_COLOR is unset
    Styled,
    /// Text with delimiters removed and highlight footnotes
    Plain,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
