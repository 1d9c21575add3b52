use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Post repository - the owner of every post and of the id allocator.
///
/// Every operation must appear to take effect atomically, in a single global
/// order consistent with real-time call order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post. The id and both timestamps are assigned here.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Snapshot of all current posts. Callers must not rely on ordering.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Post, RepoError>;

    /// Replace title, content and author of an existing post.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError>;

    /// Remove a post permanently. Its id is never handed out again.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;

    /// Case-insensitive keyword match against title, content and author.
    async fn search(&self, keyword: &str) -> Result<Vec<Post>, RepoError>;

    /// Number of posts currently stored.
    async fn count(&self) -> Result<usize, RepoError>;
}
