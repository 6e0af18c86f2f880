use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{KbArticle, KbArticleCreate, KbArticleUpdate};
use crate::pagination::{default_page, default_size, Page};
use crate::state::AppState;

/// GET /kb
pub async fn list_kb(State(app): State<AppState>) -> Json<Vec<KbArticle>> {
    Json(app.kb.list())
}

/// GET /kb/{id}
pub async fn get_kb(
    State(app): State<AppState>,
    Path(article_id): Path<i64>,
) -> Result<Json<KbArticle>, ApiError> {
    app.kb
        .get(article_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("KB article not found"))
}

/// POST /kb
pub async fn create_kb(
    State(app): State<AppState>,
    Json(payload): Json<KbArticleCreate>,
) -> Json<KbArticle> {
    Json(app.kb.create(payload))
}

/// PATCH /kb/{id}
pub async fn update_kb(
    State(app): State<AppState>,
    Path(article_id): Path<i64>,
    Json(payload): Json<KbArticleUpdate>,
) -> Result<Json<KbArticle>, ApiError> {
    app.kb
        .update(article_id, payload)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("KB article not found"))
}

/// DELETE /kb/{id}
pub async fn delete_kb(
    State(app): State<AppState>,
    Path(article_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !app.kb.delete(article_id) {
        return Err(ApiError::not_found("KB article not found"));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

#[derive(Debug, Deserialize)]
pub struct SearchKbParams {
    /// Search query matched in title, content, or tags.
    pub q: String,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
}

/// GET /kb/search — term search across title, content, and tags, paginated.
pub async fn search_kb(
    State(app): State<AppState>,
    Query(params): Query<SearchKbParams>,
) -> Result<Json<Vec<KbArticle>>, ApiError> {
    let page = Page::new(params.page, params.size)?;
    let q = params.q.to_lowercase();

    let mut items = app.kb.list();
    items.retain(|a| {
        a.title.to_lowercase().contains(&q)
            || a.content.to_lowercase().contains(&q)
            || a.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
    });
    Ok(Json(page.slice(&items)))
}
