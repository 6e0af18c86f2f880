//! Repository traits and in-memory implementations.
//!
//! Handlers depend on the traits only, so the in-memory stores can be
//! swapped for a database-backed implementation without touching routes.
//! Stores are keyed by id in a `BTreeMap` so listing preserves creation
//! order, and each store hands out sequential ids starting at 1.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::models::{
    Comment, CommentCreate, KbArticle, KbArticleCreate, KbArticleUpdate, Ticket, TicketCreate,
    TicketUpdate,
};

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

pub trait TicketRepository: Send + Sync {
    fn list(&self) -> Vec<Ticket>;
    fn get(&self, ticket_id: i64) -> Option<Ticket>;
    fn create(&self, payload: TicketCreate) -> Ticket;
    fn update(&self, ticket_id: i64, payload: TicketUpdate) -> Option<Ticket>;
    fn delete(&self, ticket_id: i64) -> bool;
}

pub trait CommentRepository: Send + Sync {
    fn list_for_ticket(&self, ticket_id: i64) -> Vec<Comment>;
    fn create(&self, payload: CommentCreate) -> Comment;
}

pub trait KbRepository: Send + Sync {
    fn list(&self) -> Vec<KbArticle>;
    fn get(&self, article_id: i64) -> Option<KbArticle>;
    fn create(&self, payload: KbArticleCreate) -> KbArticle;
    fn update(&self, article_id: i64, payload: KbArticleUpdate) -> Option<KbArticle>;
    fn delete(&self, article_id: i64) -> bool;
}

// ---------------------------------------------------------------------------
// In-memory tickets
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TicketStore {
    items: BTreeMap<i64, Ticket>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryTicketRepository {
    inner: Mutex<TicketStore>,
}

impl TicketRepository for InMemoryTicketRepository {
    fn list(&self) -> Vec<Ticket> {
        self.inner.lock().unwrap().items.values().cloned().collect()
    }

    fn get(&self, ticket_id: i64) -> Option<Ticket> {
        self.inner.lock().unwrap().items.get(&ticket_id).cloned()
    }

    fn create(&self, payload: TicketCreate) -> Ticket {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let now = Utc::now();
        let ticket = Ticket {
            id: store.next_id,
            title: payload.title,
            description: payload.description,
            status: "open".to_string(),
            created_by: payload.created_by,
            created_at: now,
            updated_at: now,
            tags: payload.tags,
        };
        store.items.insert(ticket.id, ticket.clone());
        ticket
    }

    fn update(&self, ticket_id: i64, payload: TicketUpdate) -> Option<Ticket> {
        let mut store = self.inner.lock().unwrap();
        let ticket = store.items.get_mut(&ticket_id)?;
        if let Some(title) = payload.title {
            ticket.title = title;
        }
        if let Some(description) = payload.description {
            ticket.description = description;
        }
        if let Some(status) = payload.status {
            ticket.status = status;
        }
        if let Some(tags) = payload.tags {
            ticket.tags = tags;
        }
        ticket.updated_at = Utc::now();
        Some(ticket.clone())
    }

    fn delete(&self, ticket_id: i64) -> bool {
        self.inner.lock().unwrap().items.remove(&ticket_id).is_some()
    }
}

// ---------------------------------------------------------------------------
// In-memory comments
// ---------------------------------------------------------------------------

#[derive(Default)]
struct CommentStore {
    items: BTreeMap<i64, Comment>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    inner: Mutex<CommentStore>,
}

impl CommentRepository for InMemoryCommentRepository {
    fn list_for_ticket(&self, ticket_id: i64) -> Vec<Comment> {
        self.inner
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|c| c.ticket_id == ticket_id)
            .cloned()
            .collect()
    }

    fn create(&self, payload: CommentCreate) -> Comment {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let comment = Comment {
            id: store.next_id,
            ticket_id: payload.ticket_id,
            author: payload.author,
            message: payload.message,
            created_at: Utc::now(),
        };
        store.items.insert(comment.id, comment.clone());
        comment
    }
}

// ---------------------------------------------------------------------------
// In-memory knowledge base
// ---------------------------------------------------------------------------

#[derive(Default)]
struct KbStore {
    items: BTreeMap<i64, KbArticle>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryKbRepository {
    inner: Mutex<KbStore>,
}

impl KbRepository for InMemoryKbRepository {
    fn list(&self) -> Vec<KbArticle> {
        self.inner.lock().unwrap().items.values().cloned().collect()
    }

    fn get(&self, article_id: i64) -> Option<KbArticle> {
        self.inner.lock().unwrap().items.get(&article_id).cloned()
    }

    fn create(&self, payload: KbArticleCreate) -> KbArticle {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let now = Utc::now();
        let article = KbArticle {
            id: store.next_id,
            title: payload.title,
            content: payload.content,
            created_at: now,
            updated_at: now,
            tags: payload.tags,
        };
        store.items.insert(article.id, article.clone());
        article
    }

    fn update(&self, article_id: i64, payload: KbArticleUpdate) -> Option<KbArticle> {
        let mut store = self.inner.lock().unwrap();
        let article = store.items.get_mut(&article_id)?;
        if let Some(title) = payload.title {
            article.title = title;
        }
        if let Some(content) = payload.content {
            article.content = content;
        }
        if let Some(tags) = payload.tags {
            article.tags = tags;
        }
        article.updated_at = Utc::now();
        Some(article.clone())
    }

    fn delete(&self, article_id: i64) -> bool {
        self.inner.lock().unwrap().items.remove(&article_id).is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
