use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one linter run, printed by `lintrun --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub linter: String,
    pub passed: bool,
    /// Raw status the linter exited with. `-1` when the process was killed
    /// by a signal and produced no exit code.
    pub status: i32,
    pub duration_ms: u64,
    pub started_at: DateTime<Utc>,
}
