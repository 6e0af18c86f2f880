use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintRunError {
    #[error("project root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("no virtual environment under {0}: expected venv/ or .venv/ with an interpreter")]
    VenvMissing(PathBuf),

    #[error("virtual environment at {0} has no python interpreter")]
    VenvCorrupt(PathBuf),

    #[error("no supported linter found in the virtual environment (looked for ruff, flake8, pylint)")]
    NoLinter,

    #[error("configured linter '{0}' is not installed in the virtual environment")]
    LinterNotInstalled(String),

    #[error("failed to spawn linter: {0}")]
    Spawn(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, LintRunError>;
