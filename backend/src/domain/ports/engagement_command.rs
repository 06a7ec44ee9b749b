//! Driving port for like and comment mutations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Comment, CommentBody, EngagementValidationError, Error, UnlikeOutcome, UserId};

/// Serializable comment payload for driving ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentPayload {
    fn from(value: Comment) -> Self {
        Self {
            id: value.id(),
            post_id: value.post_id(),
            author_id: value.author().clone(),
            body: value.body().as_ref().to_owned(),
            created_at: value.created_at(),
        }
    }
}

impl TryFrom<CommentPayload> for Comment {
    type Error = EngagementValidationError;

    fn try_from(value: CommentPayload) -> Result<Self, Self::Error> {
        let body = CommentBody::new(value.body)?;
        Ok(Comment::new(
            value.id,
            value.post_id,
            value.author_id,
            body,
            value.created_at,
        ))
    }
}

/// Request to like a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikePostRequest {
    pub user: UserId,
    pub post_id: Uuid,
}

/// Response from liking a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikePostResponse {
    pub liked: bool,
}

/// Request to remove a like from a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlikePostRequest {
    pub user: UserId,
    pub post_id: Uuid,
}

/// Response from removing a like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlikePostResponse {
    pub liked: bool,
    pub removed: bool,
}

impl From<UnlikeOutcome> for UnlikePostResponse {
    fn from(outcome: UnlikeOutcome) -> Self {
        Self {
            liked: false,
            removed: outcome.removed(),
        }
    }
}

/// Request to comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub author: UserId,
    pub post_id: Uuid,
    pub body: String,
}

/// Response from commenting on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentResponse {
    pub comment: CommentPayload,
}

/// Request to delete a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentRequest {
    pub requester: UserId,
    pub comment_id: Uuid,
}

/// Response from deleting a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentResponse {
    pub deleted: bool,
}

/// Driving port for like and comment write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngagementCommand: Send + Sync {
    /// Like a post.
    ///
    /// Unknown posts are reported as not found and an existing like as a
    /// conflict.
    async fn like(&self, request: LikePostRequest) -> Result<LikePostResponse, Error>;

    /// Remove the requester's like from a post if it exists.
    async fn unlike(&self, request: UnlikePostRequest) -> Result<UnlikePostResponse, Error>;

    /// Comment on a post.
    async fn add_comment(&self, request: AddCommentRequest) -> Result<AddCommentResponse, Error>;

    /// Delete a comment.
    ///
    /// Only the comment's author or the owner of the commented post may
    /// delete it; other requesters are rejected as forbidden.
    async fn delete_comment(
        &self,
        request: DeleteCommentRequest,
    ) -> Result<DeleteCommentResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEngagementCommand;

#[async_trait]
impl EngagementCommand for FixtureEngagementCommand {
    async fn like(&self, request: LikePostRequest) -> Result<LikePostResponse, Error> {
        Err(Error::not_found(format!(
            "post {} not found",
            request.post_id
        )))
    }

    async fn unlike(&self, _request: UnlikePostRequest) -> Result<UnlikePostResponse, Error> {
        Ok(UnlikePostResponse {
            liked: false,
            removed: false,
        })
    }

    async fn add_comment(&self, request: AddCommentRequest) -> Result<AddCommentResponse, Error> {
        Err(Error::not_found(format!(
            "post {} not found",
            request.post_id
        )))
    }

    async fn delete_comment(
        &self,
        request: DeleteCommentRequest,
    ) -> Result<DeleteCommentResponse, Error> {
        Err(Error::not_found(format!(
            "comment {} not found",
            request.comment_id
        )))
    }
}
