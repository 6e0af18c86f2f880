//! The lint pipeline: discover the venv, select a linter, run it with the
//! venv's environment, and capture its exit status.

use std::path::Path;
use std::process::Stdio;

use chrono::Utc;

use crate::config::Config;
use crate::error::{LintRunError, Result};
use crate::linter::select_linter;
use crate::report::RunReport;
use crate::venv::Venv;

/// Outcome of a linter invocation that actually ran to completion.
/// Setup failures (missing venv, no linter, spawn error) never construct
/// one; they surface as `LintRunError` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintOutcome {
    Clean,
    Findings { status: i32 },
}

impl LintOutcome {
    fn from_status(status: i32) -> Self {
        if status == 0 {
            LintOutcome::Clean
        } else {
            LintOutcome::Findings { status }
        }
    }

    /// Process exit code for this outcome. Every non-zero linter status
    /// normalizes to 1; the raw status is never passed through.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintOutcome::Clean => 0,
            LintOutcome::Findings { .. } => 1,
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, LintOutcome::Clean)
    }
}

/// Run the project's linter inside its venv and capture the result.
///
/// The child inherits stdout/stderr so the linter's own report reaches the
/// terminal unmodified; lintrun adds no output of its own on this path.
pub fn run_lint(root: &Path, config: &Config) -> Result<(LintOutcome, RunReport)> {
    if !root.is_dir() {
        return Err(LintRunError::RootNotFound(root.to_path_buf()));
    }

    let venv = Venv::discover(root, config.venv.as_deref())?;
    tracing::debug!(venv = %venv.root().display(), "virtual environment");

    let resolved = select_linter(&venv, config.linter.as_deref())?;
    tracing::info!(
        linter = resolved.linter.name(),
        exe = %resolved.exe.display(),
        "running linter"
    );

    let mut cmd = resolved.linter.command(&resolved.exe, &config.extra_args);
    cmd.current_dir(root);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    venv.apply(&mut cmd);

    let started_at = Utc::now();
    let start = std::time::Instant::now();

    let status = cmd
        .status()
        .map_err(|e| LintRunError::Spawn(e.to_string()))?;

    let duration_ms = start.elapsed().as_millis() as u64;

    // No code means the linter died on a signal; treat it as findings.
    let raw = status.code().unwrap_or(-1);
    let outcome = LintOutcome::from_status(raw);

    let report = RunReport {
        linter: resolved.linter.name().to_string(),
        passed: outcome.passed(),
        status: raw,
        duration_ms,
        started_at,
    };

    tracing::debug!(status = raw, duration_ms, "linter finished");
    Ok((outcome, report))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
