//! # tip-segmenter
//!
//! Turns tip descriptions into ordered, styled segments: `**bold**` and
//! `'italic'` spans plus keyword highlights that override them.
//!
//! ## Subcommands
//! - `segment`: one description from an argument or stdin
//! - `tips`: every tip of a `tips-<lang>.json` store
//! - `completions`: shell completion scripts

mod cli;
mod core;
mod render;
mod run;
mod text;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    let result = match args.command {
        Commands::Segment {
            text,
            keywords,
            highlights,
            format,
        } => run::run_segment(text, &keywords, highlights.as_deref(), format),
        Commands::Tips {
            lang,
            data_dir,
            all,
            format,
        } => run::run_tips(lang, data_dir.as_deref(), all, format),
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
