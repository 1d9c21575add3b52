//! In-memory post store.
//!
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

struct StoreState {
    posts: HashMap<PostId, Post>,
    /// Next id to hand out. Only ever increases, independent of `posts.len()`.
    next_id: PostId,
}

/// In-memory post store using a HashMap behind a single async RwLock.
///
/// Reads share the lock and run in parallel. Create, update and delete take it
/// exclusively, so each operation is one critical section over the whole map
/// and the id counter together.
pub struct InMemoryPostStore {
    state: RwLock<StoreState>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                posts: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn sorted(mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_unstable_by_key(|p| p.id);
        posts
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let post = Post::new(id, draft, Utc::now());
        state.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;
        let posts: Vec<Post> = state.posts.values().cloned().collect();
        drop(state);

        Ok(Self::sorted(posts))
    }

    async fn find_by_id(&self, id: PostId) -> Result<Post, RepoError> {
        let state = self.state.read().await;
        state
            .posts
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound { id })
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;
        let post = state
            .posts
            .get_mut(&id)
            .ok_or(RepoError::NotFound { id })?;

        post.apply(draft, Utc::now());
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut state = self.state.write().await;
        state
            .posts
            .remove(&id)
            .ok_or(RepoError::NotFound { id })?;
        Ok(())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Post>, RepoError> {
        let needle = keyword.to_lowercase();

        let state = self.state.read().await;
        let posts: Vec<Post> = state
            .posts
            .values()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect();
        drop(state);

        Ok(Self::sorted(posts))
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.state.read().await.posts.len())
    }
}
