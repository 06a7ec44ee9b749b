//! Driving port for follow graph mutations.
//!
//! Inbound adapters call this port to create and remove follow edges without
//! importing persistence details.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UnfollowOutcome, UserId};

/// Request for one user to follow another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUserRequest {
    pub follower: UserId,
    pub following: UserId,
}

/// Response from following a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUserResponse {
    pub following: bool,
}

/// Request for one user to unfollow another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnfollowUserRequest {
    pub follower: UserId,
    pub following: UserId,
}

/// Response from unfollowing a user.
///
/// `removed` distinguishes a removed edge from an unfollow that found no
/// edge; both outcomes end with `following` false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnfollowUserResponse {
    pub following: bool,
    pub removed: bool,
}

impl From<UnfollowOutcome> for UnfollowUserResponse {
    fn from(outcome: UnfollowOutcome) -> Self {
        Self {
            following: false,
            removed: outcome.removed(),
        }
    }
}

/// Driving port for follow graph write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowCommand: Send + Sync {
    /// Create a follow edge from `follower` to `following`.
    ///
    /// Self-follows are rejected as invalid requests, unknown targets as not
    /// found, and an existing edge as a conflict.
    async fn follow(&self, request: FollowUserRequest) -> Result<FollowUserResponse, Error>;

    /// Remove the follow edge from `follower` to `following` if it exists.
    async fn unfollow(&self, request: UnfollowUserRequest) -> Result<UnfollowUserResponse, Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFollowCommand;

#[async_trait]
impl FollowCommand for FixtureFollowCommand {
    async fn follow(&self, request: FollowUserRequest) -> Result<FollowUserResponse, Error> {
        if request.follower == request.following {
            return Err(Error::invalid_request("users cannot follow themselves"));
        }
        Ok(FollowUserResponse { following: true })
    }

    async fn unfollow(&self, _request: UnfollowUserRequest) -> Result<UnfollowUserResponse, Error> {
        Ok(UnfollowUserResponse {
            following: false,
            removed: false,
        })
    }
}
