pub mod error;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod settings;
pub mod state;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use settings::Settings;
use state::AppState;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    Router::new()
        // Health
        .route("/", get(routes::health::health_check))
        // Tickets
        .route(
            "/tickets",
            get(routes::tickets::list_tickets).post(routes::tickets::create_ticket),
        )
        .route(
            "/tickets/{ticket_id}",
            get(routes::tickets::get_ticket)
                .patch(routes::tickets::update_ticket)
                .delete(routes::tickets::delete_ticket),
        )
        .route(
            "/tickets/{ticket_id}/comments",
            get(routes::tickets::list_comments).post(routes::tickets::create_comment),
        )
        // Knowledge base
        .route(
            "/kb",
            get(routes::kb::list_kb).post(routes::kb::create_kb),
        )
        .route("/kb/search", get(routes::kb::search_kb))
        .route(
            "/kb/{article_id}",
            get(routes::kb::get_kb)
                .patch(routes::kb::update_kb)
                .delete(routes::kb::delete_kb),
        )
        .layer(cors_layer(&settings.allow_origins))
        .with_state(state)
}

/// CORS restricted to the configured origins. Credentials are allowed, so
/// methods and headers mirror the request instead of using wildcards
/// (tower-http rejects `*` combined with credentials).
fn cors_layer(allow_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Start the support backend on the given port.
pub async fn serve(state: AppState, settings: Settings, port: u16) -> anyhow::Result<()> {
    let app = build_router(state, &settings);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("{} listening on http://localhost:{port}", settings.app_name);

    axum::serve(listener, app).await?;
    Ok(())
}
