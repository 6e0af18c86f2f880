//! Linter detection and command construction.
//!
//! Detection probes the venv's bin directory in priority order
//! (ruff > flake8 > pylint). A `.lintrun.yaml` `linter:` entry pins one
//! linter and turns a missing executable into a hard error instead of
//! falling through to the next candidate.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{LintRunError, Result};
use crate::venv::Venv;

/// The supported linters, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linter {
    Ruff,
    Flake8,
    Pylint,
}

impl Linter {
    pub const ALL: [Linter; 3] = [Linter::Ruff, Linter::Flake8, Linter::Pylint];

    pub fn name(&self) -> &'static str {
        match self {
            Linter::Ruff => "ruff",
            Linter::Flake8 => "flake8",
            Linter::Pylint => "pylint",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.name() == name)
    }

    /// Build the check invocation against the current directory. The tool
    /// owns its own configuration discovery; we pass no rule options.
    pub fn command(&self, exe: &Path, extra_args: &[String]) -> Command {
        let mut cmd = Command::new(exe);
        match self {
            // `ruff .` alone is the format entrypoint; checking needs the
            // explicit subcommand.
            Linter::Ruff => {
                cmd.args(["check", "."]);
            }
            Linter::Flake8 => {
                cmd.arg(".");
            }
            Linter::Pylint => {
                cmd.arg(".");
            }
        }
        cmd.args(extra_args);
        cmd
    }
}

/// A linter resolved to its executable inside a specific venv.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLinter {
    pub linter: Linter,
    pub exe: PathBuf,
}

/// Select the linter for a run: the configured one if set, otherwise the
/// first of `Linter::ALL` present in the venv. A `which` probe on the
/// configured name is allowed as a last resort so globally-installed
/// linters named in config still work.
pub fn select_linter(venv: &Venv, configured: Option<&str>) -> Result<ResolvedLinter> {
    if let Some(name) = configured {
        let linter = Linter::from_name(name)
            .ok_or_else(|| LintRunError::LinterNotInstalled(name.to_string()))?;
        if let Some(exe) = venv.find_exe(name) {
            return Ok(ResolvedLinter { linter, exe });
        }
        if let Ok(exe) = which::which(name) {
            return Ok(ResolvedLinter { linter, exe });
        }
        return Err(LintRunError::LinterNotInstalled(name.to_string()));
    }

    for linter in Linter::ALL {
        if let Some(exe) = venv.find_exe(linter.name()) {
            return Ok(ResolvedLinter { linter, exe });
        }
    }
    Err(LintRunError::NoLinter)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
