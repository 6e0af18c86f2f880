pub mod config;
pub mod error;
pub mod linter;
pub mod paths;
pub mod report;
pub mod runner;
pub mod venv;

pub use error::{LintRunError, Result};
pub use runner::{run_lint, LintOutcome};
