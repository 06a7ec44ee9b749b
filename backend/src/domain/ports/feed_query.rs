//! Driving port for home feed reads.
//!
//! The feed is viewer-relative: entries come from the viewer's own posts and
//! the posts of every user the viewer follows. Anonymous viewers receive an
//! empty feed rather than an authentication error so clients can render a
//! logged-out timeline shell.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId};

use super::post_command::PostPayload;

/// Request to compose the home feed for an optional viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeedRequest {
    pub viewer: Option<UserId>,
}

/// Response containing feed entries, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeedResponse {
    pub entries: Vec<PostPayload>,
}

/// Driving port for home feed read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedQuery: Send + Sync {
    /// Compose the home feed for the given viewer.
    async fn home_feed(&self, request: HomeFeedRequest) -> Result<HomeFeedResponse, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFeedQuery;

#[async_trait]
impl FeedQuery for FixtureFeedQuery {
    async fn home_feed(&self, _request: HomeFeedRequest) -> Result<HomeFeedResponse, Error> {
        Ok(HomeFeedResponse {
            entries: Vec::new(),
        })
    }
}
