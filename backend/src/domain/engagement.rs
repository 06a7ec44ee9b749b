//! Like and comment entities.
//!
//! Likes are a bare (user, post) relation with uniqueness on the pair, so no
//! value type is needed beyond the summary adapters render. Comments carry a
//! body validated for presence only.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::UserId;

/// Validation errors for engagement values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngagementValidationError {
    /// The comment body was empty or whitespace only.
    EmptyCommentBody,
}

impl std::fmt::Display for EngagementValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCommentBody => write!(f, "comment body must not be empty"),
        }
    }
}

impl std::error::Error for EngagementValidationError {}

/// Free-text body of a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    /// Validate and construct a [`CommentBody`].
    pub fn new(body: impl Into<String>) -> Result<Self, EngagementValidationError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(EngagementValidationError::EmptyCommentBody);
        }
        Ok(Self(body))
    }
}

impl AsRef<str> for CommentBody {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CommentBody> for String {
    fn from(value: CommentBody) -> Self {
        value.0
    }
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: Uuid,
    post_id: Uuid,
    author: UserId,
    body: CommentBody,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Assemble a comment from validated components.
    #[must_use]
    pub fn new(
        id: Uuid,
        post_id: Uuid,
        author: UserId,
        body: CommentBody,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            post_id,
            author,
            body,
            created_at,
        }
    }

    /// Stable comment identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The post this comment belongs to.
    #[must_use]
    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    /// The user who wrote the comment.
    #[must_use]
    pub fn author(&self) -> &UserId {
        &self.author
    }

    /// Free-text body.
    #[must_use]
    pub fn body(&self) -> &CommentBody {
        &self.body
    }

    /// When the comment was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Aggregate like state of a post as seen by one viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeSummary {
    /// Total number of likes on the post.
    pub count: u64,
    /// Whether the viewing user has liked the post; always false for
    /// anonymous viewers.
    pub liked_by_viewer: bool,
}

/// Outcome of an unlike request.
///
/// Unliking a post that was never liked is a normal, reportable result
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlikeOutcome {
    /// A like existed and was removed.
    Removed,
    /// No like existed; nothing changed.
    NotLiked,
}

impl UnlikeOutcome {
    /// Classify a store deletion result.
    #[must_use]
    pub fn from_removed(removed: bool) -> Self {
        if removed {
            Self::Removed
        } else {
            Self::NotLiked
        }
    }

    /// Whether the request removed a like.
    #[must_use]
    pub fn removed(self) -> bool {
        matches!(self, Self::Removed)
    }
}
