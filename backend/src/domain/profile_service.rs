//! Public profile domain service.
//!
//! Assembles a profile from the identity directory, the follow store, and
//! the post store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CurrentUserQuery, FollowStore, FollowStoreError, IdentityDirectory, IdentityDirectoryError,
    PostStore, PostStoreError, ProfilePayload, ProfileQuery, ProfileRequest, ProfileResponse,
};
use crate::domain::{Error, User, UserId};

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

fn map_follow_store_error(error: FollowStoreError) -> Error {
    match error {
        FollowStoreError::Connection { message } => {
            Error::service_unavailable(format!("follow store unavailable: {message}"))
        }
        FollowStoreError::Query { message } => {
            Error::internal(format!("follow store error: {message}"))
        }
        FollowStoreError::DuplicateEdge { .. } => {
            Error::internal("follow store reported a duplicate edge during a read")
        }
    }
}

fn map_post_store_error(error: PostStoreError) -> Error {
    match error {
        PostStoreError::Connection { message } => {
            Error::service_unavailable(format!("post store unavailable: {message}"))
        }
        PostStoreError::Query { message } => {
            Error::internal(format!("post store error: {message}"))
        }
    }
}

/// Profile service implementing the profile query driving port.
#[derive(Clone)]
pub struct ProfileQueryService<D, F, P> {
    directory: Arc<D>,
    follow_store: Arc<F>,
    post_store: Arc<P>,
}

impl<D, F, P> ProfileQueryService<D, F, P> {
    /// Create a new profile service with the directory and stores.
    pub fn new(directory: Arc<D>, follow_store: Arc<F>, post_store: Arc<P>) -> Self {
        Self {
            directory,
            follow_store,
            post_store,
        }
    }
}

#[async_trait]
impl<D, F, P> ProfileQuery for ProfileQueryService<D, F, P>
where
    D: IdentityDirectory,
    F: FollowStore,
    P: PostStore,
{
    async fn profile(&self, request: ProfileRequest) -> Result<ProfileResponse, Error> {
        let user = self
            .directory
            .find_by_id(&request.user_id)
            .await
            .map_err(map_directory_error)?
            .ok_or_else(|| Error::not_found(format!("user {} not found", request.user_id)))?;

        let follower_count = self
            .follow_store
            .follower_count(&request.user_id)
            .await
            .map_err(map_follow_store_error)?;
        let following_count = self
            .follow_store
            .following_count(&request.user_id)
            .await
            .map_err(map_follow_store_error)?;

        let followed_by_viewer = match &request.viewer {
            Some(viewer) => self
                .follow_store
                .exists(viewer, &request.user_id)
                .await
                .map_err(map_follow_store_error)?,
            None => false,
        };

        let posts = self
            .post_store
            .posts_by_author(&request.user_id)
            .await
            .map_err(map_post_store_error)?;

        Ok(ProfileResponse {
            profile: ProfilePayload {
                id: user.id().clone(),
                username: user.username().as_ref().to_owned(),
                follower_count,
                following_count,
                followed_by_viewer,
                posts: posts.into_iter().map(Into::into).collect(),
            },
        })
    }
}

/// Identity lookup implementing the current-user driving port.
#[derive(Clone)]
pub struct CurrentUserQueryService<D> {
    directory: Arc<D>,
}

impl<D> CurrentUserQueryService<D> {
    /// Create a new lookup over the identity directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D> CurrentUserQuery for CurrentUserQueryService<D>
where
    D: IdentityDirectory,
{
    async fn current_user(&self, user_id: &UserId) -> Result<User, Error> {
        self.directory
            .find_by_id(user_id)
            .await
            .map_err(map_directory_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))
    }
}

#[cfg(test)]
#[path = "profile_service_tests.rs"]
mod tests;
