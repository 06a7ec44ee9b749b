//! Port for post persistence and candidate reads for feed composition.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by post store adapters.
    pub enum PostStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "post store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "post store query failed: {message}",
    }
}

/// Port for writing posts and reading them back by author.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a post.
    async fn insert(&self, post: &Post) -> Result<(), PostStoreError>;

    /// Find a post by id.
    async fn find_by_id(&self, post_id: &Uuid) -> Result<Option<Post>, PostStoreError>;

    /// Posts written by one author, newest first.
    async fn posts_by_author(&self, author: &UserId) -> Result<Vec<Post>, PostStoreError>;

    /// Posts written by any of the given authors, newest first.
    ///
    /// Feed reads fetch candidates for the whole author set in one round
    /// trip; adapters must not issue one query per author.
    async fn posts_by_authors(&self, authors: &[UserId]) -> Result<Vec<Post>, PostStoreError>;

    /// Remove a post, reporting whether one existed.
    async fn delete(&self, post_id: &Uuid) -> Result<bool, PostStoreError>;
}

/// Fixture implementation for tests that do not exercise post persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePostStore;

#[async_trait]
impl PostStore for FixturePostStore {
    async fn insert(&self, _post: &Post) -> Result<(), PostStoreError> {
        Ok(())
    }

    async fn find_by_id(&self, _post_id: &Uuid) -> Result<Option<Post>, PostStoreError> {
        Ok(None)
    }

    async fn posts_by_author(&self, _author: &UserId) -> Result<Vec<Post>, PostStoreError> {
        Ok(Vec::new())
    }

    async fn posts_by_authors(&self, _authors: &[UserId]) -> Result<Vec<Post>, PostStoreError> {
        Ok(Vec::new())
    }

    async fn delete(&self, _post_id: &Uuid) -> Result<bool, PostStoreError> {
        Ok(false)
    }
}
