//! Follow graph domain services.
//!
//! These services implement the follow driving ports on top of the follow
//! store and the identity directory.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{
    FollowCommand, FollowQuery, FollowRelationshipRequest, FollowRelationshipResponse,
    FollowStore, FollowStoreError, FollowUserRequest, FollowUserResponse, IdentityDirectory,
    IdentityDirectoryError, UnfollowUserRequest, UnfollowUserResponse,
};
use crate::domain::{Error, FollowEdge, UnfollowOutcome};

fn map_store_error(error: FollowStoreError) -> Error {
    match error {
        FollowStoreError::Connection { message } => {
            Error::service_unavailable(format!("follow store unavailable: {message}"))
        }
        FollowStoreError::Query { message } => {
            Error::internal(format!("follow store error: {message}"))
        }
        FollowStoreError::DuplicateEdge {
            follower,
            following,
        } => Error::conflict(format!("{follower} already follows {following}")),
    }
}

fn map_directory_error(error: IdentityDirectoryError) -> Error {
    match error {
        IdentityDirectoryError::Connection { message } => {
            Error::service_unavailable(format!("identity directory unavailable: {message}"))
        }
        IdentityDirectoryError::Query { message } => {
            Error::internal(format!("identity directory error: {message}"))
        }
    }
}

/// Follow graph service implementing the command driving port.
#[derive(Clone)]
pub struct FollowCommandService<S, D> {
    follow_store: Arc<S>,
    directory: Arc<D>,
    clock: Arc<dyn Clock>,
}

impl<S, D> FollowCommandService<S, D> {
    /// Create a new command service with the follow store and directory.
    pub fn new(follow_store: Arc<S>, directory: Arc<D>, clock: Arc<dyn Clock>) -> Self {
        Self {
            follow_store,
            directory,
            clock,
        }
    }
}

#[async_trait]
impl<S, D> FollowCommand for FollowCommandService<S, D>
where
    S: FollowStore,
    D: IdentityDirectory,
{
    async fn follow(&self, request: FollowUserRequest) -> Result<FollowUserResponse, Error> {
        let edge = FollowEdge::new(request.follower, request.following, self.clock.utc())
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        self.directory
            .find_by_id(edge.following())
            .await
            .map_err(map_directory_error)?
            .ok_or_else(|| Error::not_found(format!("user {} not found", edge.following())))?;

        self.follow_store
            .insert(&edge)
            .await
            .map_err(map_store_error)?;

        Ok(FollowUserResponse { following: true })
    }

    async fn unfollow(&self, request: UnfollowUserRequest) -> Result<UnfollowUserResponse, Error> {
        let removed = self
            .follow_store
            .delete(&request.follower, &request.following)
            .await
            .map_err(map_store_error)?;

        Ok(UnfollowOutcome::from_removed(removed).into())
    }
}

/// Follow graph service implementing the query driving port.
#[derive(Clone)]
pub struct FollowQueryService<S> {
    follow_store: Arc<S>,
}

impl<S> FollowQueryService<S> {
    /// Create a new query service with the follow store.
    pub fn new(follow_store: Arc<S>) -> Self {
        Self { follow_store }
    }
}

#[async_trait]
impl<S> FollowQuery for FollowQueryService<S>
where
    S: FollowStore,
{
    async fn relationship(
        &self,
        request: FollowRelationshipRequest,
    ) -> Result<FollowRelationshipResponse, Error> {
        let following = self
            .follow_store
            .exists(&request.follower, &request.following)
            .await
            .map_err(map_store_error)?;

        Ok(FollowRelationshipResponse { following })
    }
}

#[cfg(test)]
#[path = "follow_service_tests.rs"]
mod tests;
