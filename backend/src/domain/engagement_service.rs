//! Like and comment domain services.
//!
//! These services implement the engagement driving ports on top of the like,
//! comment, and post stores.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    AddCommentRequest, AddCommentResponse, CommentStore, CommentStoreError, DeleteCommentRequest,
    DeleteCommentResponse, EngagementCommand, EngagementQuery, LikePostRequest, LikePostResponse,
    LikeStore, LikeStoreError, LikeSummaryRequest, LikeSummaryResponse, PostCommentsRequest,
    PostCommentsResponse, PostStore, PostStoreError, UnlikePostRequest, UnlikePostResponse,
};
use crate::domain::{Comment, CommentBody, Error, LikeSummary, Post, UnlikeOutcome};

fn map_like_store_error(error: LikeStoreError) -> Error {
    match error {
        LikeStoreError::Connection { message } => {
            Error::service_unavailable(format!("like store unavailable: {message}"))
        }
        LikeStoreError::Query { message } => {
            Error::internal(format!("like store error: {message}"))
        }
        LikeStoreError::DuplicateLike { user, post } => {
            Error::conflict(format!("{user} already liked {post}"))
        }
    }
}

fn map_comment_store_error(error: CommentStoreError) -> Error {
    match error {
        CommentStoreError::Connection { message } => {
            Error::service_unavailable(format!("comment store unavailable: {message}"))
        }
        CommentStoreError::Query { message } => {
            Error::internal(format!("comment store error: {message}"))
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

/// Engagement service implementing the command driving port.
#[derive(Clone)]
pub struct EngagementCommandService<P, L, C> {
    post_store: Arc<P>,
    like_store: Arc<L>,
    comment_store: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<P, L, C> EngagementCommandService<P, L, C> {
    /// Create a new command service with the post, like, and comment stores.
    pub fn new(
        post_store: Arc<P>,
        like_store: Arc<L>,
        comment_store: Arc<C>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            post_store,
            like_store,
            comment_store,
            clock,
        }
    }
}

impl<P, L, C> EngagementCommandService<P, L, C>
where
    P: PostStore,
{
    async fn require_post(&self, post_id: &Uuid) -> Result<Post, Error> {
        self.post_store
            .find_by_id(post_id)
            .await
            .map_err(map_post_store_error)?
            .ok_or_else(|| Error::not_found(format!("post {post_id} not found")))
    }
}

#[async_trait]
impl<P, L, C> EngagementCommand for EngagementCommandService<P, L, C>
where
    P: PostStore,
    L: LikeStore,
    C: CommentStore,
{
    async fn like(&self, request: LikePostRequest) -> Result<LikePostResponse, Error> {
        self.require_post(&request.post_id).await?;

        self.like_store
            .insert(&request.user, &request.post_id)
            .await
            .map_err(map_like_store_error)?;

        Ok(LikePostResponse { liked: true })
    }

    async fn unlike(&self, request: UnlikePostRequest) -> Result<UnlikePostResponse, Error> {
        let removed = self
            .like_store
            .delete(&request.user, &request.post_id)
            .await
            .map_err(map_like_store_error)?;

        Ok(UnlikeOutcome::from_removed(removed).into())
    }

    async fn add_comment(&self, request: AddCommentRequest) -> Result<AddCommentResponse, Error> {
        let body = CommentBody::new(request.body)
            .map_err(|err| Error::invalid_request(format!("invalid comment payload: {err}")))?;

        self.require_post(&request.post_id).await?;

        let comment = Comment::new(
            Uuid::new_v4(),
            request.post_id,
            request.author,
            body,
            self.clock.utc(),
        );

        self.comment_store
            .insert(&comment)
            .await
            .map_err(map_comment_store_error)?;

        Ok(AddCommentResponse {
            comment: comment.into(),
        })
    }

    async fn delete_comment(
        &self,
        request: DeleteCommentRequest,
    ) -> Result<DeleteCommentResponse, Error> {
        let comment = self
            .comment_store
            .find_by_id(&request.comment_id)
            .await
            .map_err(map_comment_store_error)?
            .ok_or_else(|| {
                Error::not_found(format!("comment {} not found", request.comment_id))
            })?;

        if comment.author() != &request.requester {
            let post = self.require_post(&comment.post_id()).await?;
            if post.author() != &request.requester {
                return Err(Error::forbidden(
                    "only the comment author or the post owner may delete a comment",
                ));
            }
        }

        let deleted = self
            .comment_store
            .delete(&request.comment_id)
            .await
            .map_err(map_comment_store_error)?;

        Ok(DeleteCommentResponse { deleted })
    }
}

/// Engagement service implementing the query driving port.
#[derive(Clone)]
pub struct EngagementQueryService<L, C> {
    like_store: Arc<L>,
    comment_store: Arc<C>,
}

impl<L, C> EngagementQueryService<L, C> {
    /// Create a new query service with the like and comment stores.
    pub fn new(like_store: Arc<L>, comment_store: Arc<C>) -> Self {
        Self {
            like_store,
            comment_store,
        }
    }
}

#[async_trait]
impl<L, C> EngagementQuery for EngagementQueryService<L, C>
where
    L: LikeStore,
    C: CommentStore,
{
    async fn like_summary(
        &self,
        request: LikeSummaryRequest,
    ) -> Result<LikeSummaryResponse, Error> {
        let count = self
            .like_store
            .count_for_post(&request.post_id)
            .await
            .map_err(map_like_store_error)?;

        let liked_by_viewer = match request.viewer {
            Some(viewer) => self
                .like_store
                .exists(&viewer, &request.post_id)
                .await
                .map_err(map_like_store_error)?,
            None => false,
        };

        Ok(LikeSummary {
            count,
            liked_by_viewer,
        }
        .into())
    }

    async fn comments(&self, request: PostCommentsRequest) -> Result<PostCommentsResponse, Error> {
        let comments = self
            .comment_store
            .comments_for_post(&request.post_id)
            .await
            .map_err(map_comment_store_error)?;

        Ok(PostCommentsResponse {
            comments: comments.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
#[path = "engagement_service_tests.rs"]
mod tests;
