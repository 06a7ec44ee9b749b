//! Port for comment persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Comment;

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment store adapters.
    pub enum CommentStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "comment store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "comment store query failed: {message}",
    }
}

/// Port for writing comments and reading them back per post.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Persist a comment.
    async fn insert(&self, comment: &Comment) -> Result<(), CommentStoreError>;

    /// Find a comment by id.
    async fn find_by_id(&self, comment_id: &Uuid) -> Result<Option<Comment>, CommentStoreError>;

    /// Comments on one post, oldest first.
    async fn comments_for_post(&self, post_id: &Uuid) -> Result<Vec<Comment>, CommentStoreError>;

    /// Remove a comment, reporting whether one existed.
    async fn delete(&self, comment_id: &Uuid) -> Result<bool, CommentStoreError>;
}

/// Fixture implementation for tests that do not exercise comment persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCommentStore;

#[async_trait]
impl CommentStore for FixtureCommentStore {
    async fn insert(&self, _comment: &Comment) -> Result<(), CommentStoreError> {
        Ok(())
    }

    async fn find_by_id(&self, _comment_id: &Uuid) -> Result<Option<Comment>, CommentStoreError> {
        Ok(None)
    }

    async fn comments_for_post(
        &self,
        _post_id: &Uuid,
    ) -> Result<Vec<Comment>, CommentStoreError> {
        Ok(Vec::new())
    }

    async fn delete(&self, _comment_id: &Uuid) -> Result<bool, CommentStoreError> {
        Ok(false)
    }
}
