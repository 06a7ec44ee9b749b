//! Driving port for post read operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId};

use super::post_command::PostPayload;

/// Request to list the posts written by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPostsRequest {
    pub author: UserId,
}

/// Response containing one author's posts, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPostsResponse {
    pub posts: Vec<PostPayload>,
}

/// Driving port for post read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostQuery: Send + Sync {
    /// List the posts written by one author, newest first.
    async fn posts_by_author(&self, request: AuthorPostsRequest)
    -> Result<AuthorPostsResponse, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePostQuery;

#[async_trait]
impl PostQuery for FixturePostQuery {
    async fn posts_by_author(
        &self,
        _request: AuthorPostsRequest,
    ) -> Result<AuthorPostsResponse, Error> {
        Ok(AuthorPostsResponse { posts: Vec::new() })
    }
}
