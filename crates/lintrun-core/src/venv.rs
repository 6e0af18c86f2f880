//! Virtual environment discovery and scoped activation.
//!
//! The shell idiom `source venv/bin/activate` mutates the calling process.
//! Here activation is scoped instead: `Venv::apply` sets `VIRTUAL_ENV` and
//! prepends the venv bin dir to `PATH` on the child `Command` only, so the
//! parent environment is never touched and nothing needs tearing down.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{LintRunError, Result};
use crate::paths;

/// A validated handle on an existing virtual environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Venv {
    root: PathBuf,
}

impl Venv {
    /// Open the venv at `dir`, verifying it holds an interpreter.
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(LintRunError::VenvMissing(dir.to_path_buf()));
        }
        if !paths::venv_python(dir).is_file() {
            return Err(LintRunError::VenvCorrupt(dir.to_path_buf()));
        }
        Ok(Self {
            root: dir.to_path_buf(),
        })
    }

    /// Find the project's venv: the configured directory if one is set,
    /// otherwise the first of `venv/`, `.venv/` that validates.
    pub fn discover(project_root: &Path, configured: Option<&str>) -> Result<Self> {
        if let Some(dir) = configured {
            return Self::open(&project_root.join(dir));
        }
        for candidate in paths::VENV_DIRS {
            let dir = project_root.join(candidate);
            if dir.is_dir() {
                return Self::open(&dir);
            }
        }
        Err(LintRunError::VenvMissing(project_root.to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin_dir(&self) -> PathBuf {
        paths::venv_bin_dir(&self.root)
    }

    /// Absolute path of an executable inside this venv, if present.
    pub fn find_exe(&self, name: &str) -> Option<PathBuf> {
        let path = paths::venv_exe(&self.root, name);
        path.is_file().then_some(path)
    }

    /// Apply this venv's environment to a child command: `VIRTUAL_ENV` set,
    /// bin dir prepended to `PATH` so venv tools shadow system ones.
    pub fn apply(&self, cmd: &mut Command) {
        cmd.env("VIRTUAL_ENV", &self.root);

        let mut entries = vec![self.bin_dir()];
        if let Some(existing) = std::env::var_os("PATH") {
            entries.extend(std::env::split_paths(&existing));
        }
        if let Ok(path) = std::env::join_paths(entries) {
            cmd.env("PATH", path);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
