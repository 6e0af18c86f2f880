use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Optional per-project settings read from `.lintrun.yaml` at the project
/// root. Every field has a default; a missing file yields `Config::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Venv directory relative to the project root. When set, only this
    /// directory is probed; the `venv/` / `.venv/` fallback chain is skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venv: Option<String>,

    /// Force a specific linter instead of priority-ordered detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linter: Option<String>,

    /// Extra arguments appended to the linter command line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
}

impl Config {
    /// Load `.lintrun.yaml` from the project root, or defaults if absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        let config = serde_yaml::from_str(&raw)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
