//! Environment-driven application settings.
//!
//! `APP_NAME` overrides the service name reported in logs and
//! `ALLOW_ORIGINS` is a comma-separated list of origins allowed by CORS
//! (default: http://localhost:3000). Log verbosity comes from `RUST_LOG`
//! via the tracing env-filter, as everywhere else in this workspace.

const DEFAULT_APP_NAME: &str = "DSP DevX Support Backend";
const DEFAULT_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub app_name: String,
    pub allow_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            allow_origins: vec![DEFAULT_ORIGIN.to_string()],
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        let app_name =
            std::env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string());
        let allow_origins = std::env::var("ALLOW_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();
        let allow_origins = if allow_origins.is_empty() {
            vec![DEFAULT_ORIGIN.to_string()]
        } else {
            allow_origins
        };
        Self {
            app_name,
            allow_origins,
        }
    }
}

/// Split by comma and strip spaces; empty entries are dropped.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
