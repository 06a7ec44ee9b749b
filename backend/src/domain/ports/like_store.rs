//! Port for like persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by like store adapters.
    pub enum LikeStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "like store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "like store query failed: {message}",
        /// The like already exists (unique constraint on the pair).
        DuplicateLike { user: String, post: String } =>
            "like already exists: {user} on {post}",
    }
}

/// Port for writing and reading likes.
///
/// Adapters must enforce uniqueness of the (user, post) pair and report a
/// racing duplicate insert as [`LikeStoreError::DuplicateLike`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeStore: Send + Sync {
    /// Record a like.
    async fn insert(&self, user: &UserId, post_id: &Uuid) -> Result<(), LikeStoreError>;

    /// Remove a like, reporting whether one existed.
    async fn delete(&self, user: &UserId, post_id: &Uuid) -> Result<bool, LikeStoreError>;

    /// Whether `user` has liked `post_id`.
    async fn exists(&self, user: &UserId, post_id: &Uuid) -> Result<bool, LikeStoreError>;

    /// Total number of likes on `post_id`.
    async fn count_for_post(&self, post_id: &Uuid) -> Result<u64, LikeStoreError>;
}

/// Fixture implementation for tests that do not exercise like persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLikeStore;

#[async_trait]
impl LikeStore for FixtureLikeStore {
    async fn insert(&self, _user: &UserId, _post_id: &Uuid) -> Result<(), LikeStoreError> {
        Ok(())
    }

    async fn delete(&self, _user: &UserId, _post_id: &Uuid) -> Result<bool, LikeStoreError> {
        Ok(false)
    }

    async fn exists(&self, _user: &UserId, _post_id: &Uuid) -> Result<bool, LikeStoreError> {
        Ok(false)
    }

    async fn count_for_post(&self, _post_id: &Uuid) -> Result<u64, LikeStoreError> {
        Ok(0)
    }
}
