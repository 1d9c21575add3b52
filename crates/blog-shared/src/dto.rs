//! Data Transfer Objects - request types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blog_core::domain::{PostDraft, PostId};

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Any field may be omitted; text fields then decode as empty strings.
/// `id` and the timestamps are accepted so a full post can be sent back,
/// but the server always assigns them itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PostId>,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PostRequest {
    /// Keep only the caller-controlled fields.
    pub fn into_draft(self) -> PostDraft {
        PostDraft {
            title: self.title,
            content: self.content,
            author: self.author,
        }
    }
}

/// Query string of `GET /posts/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}
