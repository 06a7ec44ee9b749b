//! Port for follow edge persistence.

use async_trait::async_trait;

use crate::domain::{FollowEdge, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by follow store adapters.
    pub enum FollowStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "follow store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "follow store query failed: {message}",
        /// The edge already exists (unique constraint on the pair).
        DuplicateEdge { follower: String, following: String } =>
            "follow edge already exists: {follower} -> {following}",
    }
}

/// Port for writing and reading follow edges.
///
/// Adapters must enforce uniqueness of the (follower, following) pair and
/// report a racing duplicate insert as [`FollowStoreError::DuplicateEdge`]
/// rather than a generic query failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowStore: Send + Sync {
    /// Persist a follow edge.
    async fn insert(&self, edge: &FollowEdge) -> Result<(), FollowStoreError>;

    /// Remove a follow edge, reporting whether one existed.
    async fn delete(&self, follower: &UserId, following: &UserId)
    -> Result<bool, FollowStoreError>;

    /// Whether `follower` currently follows `following`.
    async fn exists(&self, follower: &UserId, following: &UserId)
    -> Result<bool, FollowStoreError>;

    /// Ids of every user `follower` follows.
    async fn following_ids(&self, follower: &UserId) -> Result<Vec<UserId>, FollowStoreError>;

    /// Number of users following `user`.
    async fn follower_count(&self, user: &UserId) -> Result<u64, FollowStoreError>;

    /// Number of users `user` follows.
    async fn following_count(&self, user: &UserId) -> Result<u64, FollowStoreError>;
}

/// Fixture implementation for tests that do not exercise follow persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFollowStore;

#[async_trait]
impl FollowStore for FixtureFollowStore {
    async fn insert(&self, _edge: &FollowEdge) -> Result<(), FollowStoreError> {
        Ok(())
    }

    async fn delete(
        &self,
        _follower: &UserId,
        _following: &UserId,
    ) -> Result<bool, FollowStoreError> {
        Ok(false)
    }

    async fn exists(
        &self,
        _follower: &UserId,
        _following: &UserId,
    ) -> Result<bool, FollowStoreError> {
        Ok(false)
    }

    async fn following_ids(&self, _follower: &UserId) -> Result<Vec<UserId>, FollowStoreError> {
        Ok(Vec::new())
    }

    async fn follower_count(&self, _user: &UserId) -> Result<u64, FollowStoreError> {
        Ok(0)
    }

    async fn following_count(&self, _user: &UserId) -> Result<u64, FollowStoreError> {
        Ok(0)
    }
}
