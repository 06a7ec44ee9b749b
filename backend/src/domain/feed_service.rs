//! Home feed domain service.
//!
//! Composes the viewer's home feed from the follow store and the post store.
//! Candidates for the whole author set are fetched in one store read, then
//! ordered by [`compose_home_feed`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::feed::compose_home_feed;
use crate::domain::ports::{
    FeedQuery, FollowStore, FollowStoreError, HomeFeedRequest, HomeFeedResponse, PostStore,
    PostStoreError,
};
use crate::domain::Error;

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

/// Home feed service implementing the feed query driving port.
#[derive(Clone)]
pub struct FeedQueryService<P, F> {
    post_store: Arc<P>,
    follow_store: Arc<F>,
}

impl<P, F> FeedQueryService<P, F> {
    /// Create a new feed service with the post and follow stores.
    pub fn new(post_store: Arc<P>, follow_store: Arc<F>) -> Self {
        Self {
            post_store,
            follow_store,
        }
    }
}

#[async_trait]
impl<P, F> FeedQuery for FeedQueryService<P, F>
where
    P: PostStore,
    F: FollowStore,
{
    async fn home_feed(&self, request: HomeFeedRequest) -> Result<HomeFeedResponse, Error> {
        let Some(viewer) = request.viewer else {
            return Ok(HomeFeedResponse {
                entries: Vec::new(),
            });
        };

        let mut authors = self
            .follow_store
            .following_ids(&viewer)
            .await
            .map_err(map_follow_store_error)?;
        authors.push(viewer);

        let candidates = self
            .post_store
            .posts_by_authors(&authors)
            .await
            .map_err(map_post_store_error)?;

        Ok(HomeFeedResponse {
            entries: compose_home_feed(candidates)
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }
}

#[cfg(test)]
#[path = "feed_service_tests.rs"]
mod tests;
