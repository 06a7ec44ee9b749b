//! Post domain services.
//!
//! These services implement the post driving ports for creating, deleting,
//! and listing posts.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    AuthorPostsRequest, AuthorPostsResponse, CreatePostRequest, CreatePostResponse,
    DeletePostRequest, DeletePostResponse, PostCommand, PostQuery, PostStore, PostStoreError,
};
use crate::domain::{Error, Post, PostBody};

fn map_store_error(error: PostStoreError) -> Error {
    match error {
        PostStoreError::Connection { message } => {
            Error::service_unavailable(format!("post store unavailable: {message}"))
        }
        PostStoreError::Query { message } => {
            Error::internal(format!("post store error: {message}"))
        }
    }
}

/// Post service implementing the command driving port.
#[derive(Clone)]
pub struct PostCommandService<P> {
    post_store: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<P> PostCommandService<P> {
    /// Create a new command service with the post store.
    pub fn new(post_store: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self { post_store, clock }
    }
}

#[async_trait]
impl<P> PostCommand for PostCommandService<P>
where
    P: PostStore,
{
    async fn create_post(&self, request: CreatePostRequest) -> Result<CreatePostResponse, Error> {
        let body = PostBody::new(request.body)
            .map_err(|err| Error::invalid_request(format!("invalid post payload: {err}")))?;
        let post = Post::new(Uuid::new_v4(), request.author, body, self.clock.utc());

        self.post_store
            .insert(&post)
            .await
            .map_err(map_store_error)?;

        Ok(CreatePostResponse { post: post.into() })
    }

    async fn delete_post(&self, request: DeletePostRequest) -> Result<DeletePostResponse, Error> {
        let post = self
            .post_store
            .find_by_id(&request.post_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("post {} not found", request.post_id)))?;

        // Other users' posts stay indistinguishable from missing ones.
        if post.author() != &request.requester {
            return Err(Error::not_found(format!(
                "post {} not found",
                request.post_id
            )));
        }

        let deleted = self
            .post_store
            .delete(&request.post_id)
            .await
            .map_err(map_store_error)?;

        Ok(DeletePostResponse { deleted })
    }
}

/// Post service implementing the query driving port.
#[derive(Clone)]
pub struct PostQueryService<P> {
    post_store: Arc<P>,
}

impl<P> PostQueryService<P> {
    /// Create a new query service with the post store.
    pub fn new(post_store: Arc<P>) -> Self {
        Self { post_store }
    }
}

#[async_trait]
impl<P> PostQuery for PostQueryService<P>
where
    P: PostStore,
{
    async fn posts_by_author(
        &self,
        request: AuthorPostsRequest,
    ) -> Result<AuthorPostsResponse, Error> {
        let posts = self
            .post_store
            .posts_by_author(&request.author)
            .await
            .map_err(map_store_error)?;

        Ok(AuthorPostsResponse {
            posts: posts.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
#[path = "post_service_tests.rs"]
mod tests;
