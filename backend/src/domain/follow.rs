//! Follow-graph entities.
//!
//! A follow edge is the directed relation "follower follows following". The
//! type enforces the anti-self-loop invariant at construction so no edge with
//! identical endpoints can exist anywhere in the system, whatever path it
//! arrived by.

use chrono::{DateTime, Utc};

use crate::domain::UserId;

/// Validation errors for follow-graph values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowValidationError {
    /// Follower and following ids were identical.
    SelfFollow,
}

impl std::fmt::Display for FollowValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfFollow => write!(f, "users cannot follow themselves"),
        }
    }
}

impl std::error::Error for FollowValidationError {}

/// A directed edge in the follow graph.
///
/// ## Invariants
/// - `follower` and `following` are distinct users.
///
/// # Examples
/// ```
/// use backend::domain::{FollowEdge, UserId};
/// use chrono::Utc;
///
/// let edge = FollowEdge::new(UserId::random(), UserId::random(), Utc::now())
///     .expect("distinct endpoints");
/// assert_ne!(edge.follower(), edge.following());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowEdge {
    follower: UserId,
    following: UserId,
    created_at: DateTime<Utc>,
}

impl FollowEdge {
    /// Create a validated follow edge.
    pub fn new(
        follower: UserId,
        following: UserId,
        created_at: DateTime<Utc>,
    ) -> Result<Self, FollowValidationError> {
        if follower == following {
            return Err(FollowValidationError::SelfFollow);
        }
        Ok(Self {
            follower,
            following,
            created_at,
        })
    }

    /// The user who chose to follow.
    #[must_use]
    pub fn follower(&self) -> &UserId {
        &self.follower
    }

    /// The user being followed.
    #[must_use]
    pub fn following(&self) -> &UserId {
        &self.following
    }

    /// When the edge was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Outcome of an unfollow request.
///
/// Unfollowing someone who was never followed is a normal, reportable result
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfollowOutcome {
    /// An edge existed and was removed.
    Removed,
    /// No edge existed; nothing changed.
    NotFollowing,
}

impl UnfollowOutcome {
    /// Classify a store deletion result.
    #[must_use]
    pub fn from_removed(removed: bool) -> Self {
        if removed {
            Self::Removed
        } else {
            Self::NotFollowing
        }
    }

    /// Whether the request removed an edge.
    #[must_use]
    pub fn removed(self) -> bool {
        matches!(self, Self::Removed)
    }
}
