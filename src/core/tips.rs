//! Read-only access to the flat JSON tip store (`<data_dir>/tips-<lang>.json`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::config::Language;
use crate::text::KeywordHighlight;

/// Moderation state of a tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipStatus {
    Pending,
    Approved,
    Rejected,
}

/// A tip as stored on disk. Unknown fields (e.g. the submitter's email) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub highlights: Vec<KeywordHighlight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TipStatus>,
}

impl Tip {
    /// Shown to the public: anything not pending or rejected, including tips without a status.
    pub fn is_visible(&self) -> bool {
        !matches!(
            self.status,
            Some(TipStatus::Pending) | Some(TipStatus::Rejected)
        )
    }
}

#[derive(Debug, Deserialize)]
struct TipsFile {
    tips: Vec<Tip>,
}

#[derive(Debug, thiserror::Error)]
pub enum TipsError {
    #[error("Failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid tips file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Path of the tip store for `language`.
pub fn tips_path(data_dir: &Path, language: Language) -> PathBuf {
    data_dir.join(format!("tips-{}.json", language.code()))
}

/// Load all tips from `path`. A missing file is an empty store.
pub fn load(path: &Path) -> Result<Vec<Tip>, TipsError> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No tip store at {}", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(TipsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let file: TipsFile = serde_json::from_str(&data).map_err(|source| TipsError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded {} tips from {}", file.tips.len(), path.display());
    Ok(file.tips)
}

/// Keep only tips visible to the public.
pub fn visible(tips: Vec<Tip>) -> Vec<Tip> {
    tips.into_iter().filter(Tip::is_visible).collect()
}

/// Most voted first; ties keep their stored order.
pub fn sort_by_votes(tips: &mut [Tip]) {
    tips.sort_by(|a, b| b.votes.cmp(&a.votes));
}
