use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{Comment, CommentCreate, Ticket, TicketCreate, TicketUpdate};
use crate::pagination::{default_page, default_size, Page};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTicketsParams {
    /// Optional status filter.
    pub status: Option<String>,
    /// Optional search query matched in title or description.
    pub q: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
}

/// GET /tickets — list tickets with optional status/search filters and
/// pagination.
pub async fn list_tickets(
    State(app): State<AppState>,
    Query(params): Query<ListTicketsParams>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let page = Page::new(params.page, params.size)?;

    let mut items = app.tickets.list();
    if let Some(status) = &params.status {
        items.retain(|t| &t.status == status);
    }
    if let Some(q) = &params.q {
        let q = q.to_lowercase();
        items.retain(|t| {
            t.title.to_lowercase().contains(&q) || t.description.to_lowercase().contains(&q)
        });
    }
    Ok(Json(page.slice(&items)))
}

/// GET /tickets/{id}
pub async fn get_ticket(
    State(app): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<Ticket>, ApiError> {
    app.tickets
        .get(ticket_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Ticket not found"))
}

/// POST /tickets
pub async fn create_ticket(
    State(app): State<AppState>,
    Json(payload): Json<TicketCreate>,
) -> Json<Ticket> {
    Json(app.tickets.create(payload))
}

/// PATCH /tickets/{id}
pub async fn update_ticket(
    State(app): State<AppState>,
    Path(ticket_id): Path<i64>,
    Json(payload): Json<TicketUpdate>,
) -> Result<Json<Ticket>, ApiError> {
    app.tickets
        .update(ticket_id, payload)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Ticket not found"))
}

/// DELETE /tickets/{id}
pub async fn delete_ticket(
    State(app): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !app.tickets.delete(ticket_id) {
        return Err(ApiError::not_found("Ticket not found"));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

/// GET /tickets/{id}/comments
pub async fn list_comments(
    State(app): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> Json<Vec<Comment>> {
    Json(app.comments.list_for_ticket(ticket_id))
}

/// POST /tickets/{id}/comments — the payload's ticket_id must match the
/// path parameter.
pub async fn create_comment(
    State(app): State<AppState>,
    Path(ticket_id): Path<i64>,
    Json(payload): Json<CommentCreate>,
) -> Result<Json<Comment>, ApiError> {
    if payload.ticket_id != ticket_id {
        return Err(ApiError::bad_request(
            "ticket_id mismatch between path and payload",
        ));
    }
    Ok(Json(app.comments.create(payload)))
}
