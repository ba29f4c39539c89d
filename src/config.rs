use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SprintboardError;
use crate::models::{ColumnId, Identity};
use crate::seed;

/// Settings read from `config.json` in the data directory. Missing fields
/// fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Author recorded on new comments.
    pub user: Identity,
    /// Column new tasks land in when none is given.
    pub default_column: ColumnId,
}

impl Default for Config {
    fn default() -> Self {
        let roster = seed::team_members();
        let user = roster
            .first()
            .map(|m| m.identity())
            .unwrap_or_else(|| Identity {
                id: "1".into(),
                name: "Anonymous".into(),
                avatar: String::new(),
            });
        Self {
            user,
            default_column: ColumnId::OnTrack,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, SprintboardError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| {
            SprintboardError::validation(format!("Invalid config {}: {e}", path.display()))
        })
    }

    /// Write the config unless a file is already there. Returns whether it wrote.
    pub fn write_default(path: &Path) -> Result<bool, SprintboardError> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&Self::default())?)?;
        Ok(true)
    }
}
