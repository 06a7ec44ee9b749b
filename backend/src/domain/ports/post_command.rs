//! Driving port for post mutations.
//!
//! Inbound adapters call this port to create and delete posts without
//! importing persistence details.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, Post, PostBody, PostValidationError, UserId};

/// Serializable post payload for driving ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub id: Uuid,
    pub author_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostPayload {
    fn from(value: Post) -> Self {
        Self {
            id: value.id(),
            author_id: value.author().clone(),
            created_at: value.created_at(),
            body: value.into_body().into(),
        }
    }
}

impl TryFrom<PostPayload> for Post {
    type Error = PostValidationError;

    fn try_from(value: PostPayload) -> Result<Self, Self::Error> {
        let body = PostBody::new(value.body)?;
        Ok(Post::new(value.id, value.author_id, body, value.created_at))
    }
}

/// Request to create a post on behalf of the authenticated author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub author: UserId,
    pub body: String,
}

/// Response from creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub post: PostPayload,
}

/// Request to delete a post owned by the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostRequest {
    pub requester: UserId,
    pub post_id: Uuid,
}

/// Response from deleting a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostResponse {
    pub deleted: bool,
}

/// Driving port for post write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostCommand: Send + Sync {
    /// Create a post and return its stored representation.
    ///
    /// Rejects blank bodies with a validation error at the boundary.
    async fn create_post(&self, request: CreatePostRequest) -> Result<CreatePostResponse, Error>;

    /// Delete a post owned by the requester.
    ///
    /// Posts owned by other users are reported as not found so the endpoint
    /// does not disclose their existence.
    async fn delete_post(&self, request: DeletePostRequest) -> Result<DeletePostResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePostCommand;

#[async_trait]
impl PostCommand for FixturePostCommand {
    async fn create_post(&self, request: CreatePostRequest) -> Result<CreatePostResponse, Error> {
        let body = PostBody::new(request.body)
            .map_err(|err| Error::invalid_request(format!("invalid post payload: {err}")))?;
        let post = Post::new(Uuid::new_v4(), request.author, body, Utc::now());
        Ok(CreatePostResponse { post: post.into() })
    }

    async fn delete_post(&self, request: DeletePostRequest) -> Result<DeletePostResponse, Error> {
        Err(Error::not_found(format!(
            "post {} not found",
            request.post_id
        )))
    }
}
