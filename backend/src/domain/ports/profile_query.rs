//! Driving port for public profile reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId};

use super::post_command::PostPayload;

/// Request for a user's public profile as seen by an optional viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub viewer: Option<UserId>,
    pub user_id: UserId,
}

/// A user's public profile.
///
/// `followed_by_viewer` is always false for anonymous viewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub id: UserId,
    pub username: String,
    pub follower_count: u64,
    pub following_count: u64,
    pub followed_by_viewer: bool,
    pub posts: Vec<PostPayload>,
}

/// Response containing one public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: ProfilePayload,
}

/// Driving port for public profile reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Fetch the public profile of `user_id`, including follow counts and
    /// the user's posts.
    async fn profile(&self, request: ProfileRequest) -> Result<ProfileResponse, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileQuery;

#[async_trait]
impl ProfileQuery for FixtureProfileQuery {
    async fn profile(&self, request: ProfileRequest) -> Result<ProfileResponse, Error> {
        Err(Error::not_found(format!(
            "user {} not found",
            request.user_id
        )))
    }
}
