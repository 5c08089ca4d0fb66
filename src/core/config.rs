//! Configuration from the environment (a `.env` file is loaded in `main`).

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

use crate::core::app::ENV_PREFIX;

/// Language of a tip store. Each language has its own `tips-<lang>.json` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[default]
    Ptbr,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ptbr => "ptbr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ptbr" => Ok(Language::Ptbr),
            "en" => Ok(Language::En),
            other => Err(ConfigError::UnknownLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `tips-<lang>.json`.
    pub data_dir: PathBuf,
    pub language: Language,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown language {0:?} in TIP_SEGMENTER_LANG (expected ptbr or en)")]
    UnknownLanguage(String),
}

fn var(name: &str) -> Option<String> {
    env::var(format!("{}_{}", ENV_PREFIX, name))
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// Load configuration from environment. Unset variables fall back to `data` and `ptbr`.
pub fn load() -> Result<Config, ConfigError> {
    from_vars(var("DATA_DIR"), var("LANG"))
}

fn from_vars(data_dir: Option<String>, language: Option<String>) -> Result<Config, ConfigError> {
    let data_dir = data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    let language = match language {
        Some(code) => code.parse()?,
        None => Language::default(),
    };
    Ok(Config {
        data_dir,
        language,
    })
}
