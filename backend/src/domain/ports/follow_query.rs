//! Driving port for follow graph read operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId};

/// Request to check whether one user follows another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRelationshipRequest {
    pub follower: UserId,
    pub following: UserId,
}

/// Response reporting the current state of one follow relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRelationshipResponse {
    pub following: bool,
}

/// Driving port for follow graph read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowQuery: Send + Sync {
    /// Whether `follower` currently follows `following`.
    async fn relationship(
        &self,
        request: FollowRelationshipRequest,
    ) -> Result<FollowRelationshipResponse, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFollowQuery;

#[async_trait]
impl FollowQuery for FixtureFollowQuery {
    async fn relationship(
        &self,
        _request: FollowRelationshipRequest,
    ) -> Result<FollowRelationshipResponse, Error> {
        Ok(FollowRelationshipResponse { following: false })
    }
}
