use std::sync::Arc;

use crate::models::{CommentCreate, KbArticleCreate, TicketCreate};
use crate::repository::{
    CommentRepository, InMemoryCommentRepository, InMemoryKbRepository, InMemoryTicketRepository,
    KbRepository, TicketRepository,
};

/// Shared application state passed to all route handlers. Handlers see
/// only the repository traits, never the in-memory types.
#[derive(Clone)]
pub struct AppState {
    pub tickets: Arc<dyn TicketRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub kb: Arc<dyn KbRepository>,
}

impl AppState {
    /// Empty repositories, used by tests.
    pub fn new() -> Self {
        Self {
            tickets: Arc::new(InMemoryTicketRepository::default()),
            comments: Arc::new(InMemoryCommentRepository::default()),
            kb: Arc::new(InMemoryKbRepository::default()),
        }
    }

    /// Repositories pre-populated with demo tickets, comments, and KB
    /// articles for an out-of-the-box experience.
    pub fn seeded() -> Self {
        let state = Self::new();
        seed_demo_data(&state);
        state
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_demo_data(state: &AppState) {
    let t1 = state.tickets.create(TicketCreate {
        title: "Cannot deploy service on staging".to_string(),
        description: "Deployment fails with timeout when pushing to staging.".to_string(),
        created_by: "alice".to_string(),
        tags: vec!["deployment".to_string(), "staging".to_string()],
    });
    let t2 = state.tickets.create(TicketCreate {
        title: "API rate limit errors".to_string(),
        description: "Hitting 429 too frequently when running load tests.".to_string(),
        created_by: "bob".to_string(),
        tags: vec!["api".to_string(), "limits".to_string()],
    });
    let t3 = state.tickets.create(TicketCreate {
        title: "Build pipeline flaky".to_string(),
        description: "Intermittent failures in CI on ubuntu-latest runner.".to_string(),
        created_by: "carol".to_string(),
        tags: vec!["ci".to_string(), "flaky".to_string()],
    });

    for (ticket_id, author, message) in [
        (
            t1.id,
            "support-bot",
            "We are investigating the staging cluster. ETA 2 hours.",
        ),
        (
            t1.id,
            "alice",
            "Sharing logs from the last failed deployment.",
        ),
        (
            t2.id,
            "dave",
            "Consider batching requests, docs suggest a 100 RPS soft limit.",
        ),
        (
            t3.id,
            "support",
            "We increased retry budget on CI tasks to mitigate flakiness.",
        ),
    ] {
        state.comments.create(CommentCreate {
            ticket_id,
            author: author.to_string(),
            message: message.to_string(),
        });
    }

    for (title, content, tags) in [
        (
            "How to configure staging deployments",
            "# Staging Deployments\n\nFollow these steps to configure staging...",
            ["deployment", "staging"],
        ),
        (
            "Understanding API rate limits",
            "# API Rate Limits\n\nOur API enforces dynamic throttling...",
            ["api", "limits"],
        ),
        (
            "Reducing CI flakiness",
            "# CI Flakiness\n\nUse retries and cache restoration...",
            ["ci", "stability"],
        ),
    ] {
        state.kb.create(KbArticleCreate {
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        });
    }
}
