//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Repository-level errors.
///
/// A missing post is the only failure the store reports. It is an expected
/// outcome, never fatal and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("Post not found: {id}")]
    NotFound { id: PostId },
}
