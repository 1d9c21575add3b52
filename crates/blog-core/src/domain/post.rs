use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a post. Assigned by the store, starting at 1.
pub type PostId = u64;

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-controlled part of a post, used for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Post {
    /// Create a new post with both timestamps set to `now`.
    pub fn new(id: PostId, draft: PostDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of the editable fields. `id` and `created_at` stay as they are.
    pub fn apply(&mut self, draft: PostDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
        self.updated_at = now;
    }

    /// Whether `needle` occurs in the title, content or author.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.content, &self.author]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
