//! Driving port for like and comment reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, LikeSummary, UserId};

use super::engagement_command::CommentPayload;

/// Request for the like summary of a post as seen by an optional viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeSummaryRequest {
    pub viewer: Option<UserId>,
    pub post_id: Uuid,
}

/// Response with the aggregate like state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeSummaryResponse {
    pub count: u64,
    pub liked_by_viewer: bool,
}

impl From<LikeSummary> for LikeSummaryResponse {
    fn from(summary: LikeSummary) -> Self {
        Self {
            count: summary.count,
            liked_by_viewer: summary.liked_by_viewer,
        }
    }
}

/// Request to list the comments on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentsRequest {
    pub post_id: Uuid,
}

/// Response containing a post's comments, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentsResponse {
    pub comments: Vec<CommentPayload>,
}

/// Driving port for like and comment read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngagementQuery: Send + Sync {
    /// Aggregate like state of a post for the given viewer.
    async fn like_summary(&self, request: LikeSummaryRequest)
    -> Result<LikeSummaryResponse, Error>;

    /// Comments on a post, oldest first.
    async fn comments(&self, request: PostCommentsRequest) -> Result<PostCommentsResponse, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEngagementQuery;

#[async_trait]
impl EngagementQuery for FixtureEngagementQuery {
    async fn like_summary(
        &self,
        _request: LikeSummaryRequest,
    ) -> Result<LikeSummaryResponse, Error> {
        Ok(LikeSummaryResponse {
            count: 0,
            liked_by_viewer: false,
        })
    }

    async fn comments(&self, _request: PostCommentsRequest) -> Result<PostCommentsResponse, Error> {
        Ok(PostCommentsResponse {
            comments: Vec::new(),
        })
    }
}
