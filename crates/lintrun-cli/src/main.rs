mod output;
mod root;

use clap::Parser;
use lintrun_core::config::Config;
use lintrun_core::{run_lint, LintOutcome};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lintrun",
    about = "Run the project's Python linter inside its virtualenv and exit 0/1",
    version
)]
struct Cli {
    /// Project root (default: auto-detect from a venv or .git/)
    #[arg(long, env = "LINTRUN_ROOT")]
    root: Option<PathBuf>,

    /// Print the run report as JSON instead of a summary line
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let outcome = match run(&root, cli.json) {
        Ok(outcome) => outcome,
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };

    std::process::exit(outcome.exit_code());
}

fn run(root: &std::path::Path, json: bool) -> anyhow::Result<LintOutcome> {
    let config = Config::load(root)?;
    let (outcome, report) = run_lint(root, &config)?;

    if json {
        output::print_json(&report)?;
    } else {
        // Default invocation adds nothing to the linter's own output;
        // the summary is visible only under RUST_LOG=info.
        tracing::info!(
            linter = report.linter,
            passed = report.passed,
            status = report.status,
            duration_ms = report.duration_ms,
            "lint run finished"
        );
    }

    Ok(outcome)
}
