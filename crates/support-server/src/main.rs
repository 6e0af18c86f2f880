use clap::Parser;
use support_server::settings::Settings;
use support_server::state::AppState;

#[derive(Parser)]
#[command(
    name = "support-server",
    about = "Support portal backend — tickets, comments, and knowledge base",
    version
)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Start with empty repositories instead of demo data
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let settings = Settings::from_env();
    let state = if cli.no_seed {
        AppState::new()
    } else {
        AppState::seeded()
    };

    support_server::serve(state, settings, cli.port).await
}
