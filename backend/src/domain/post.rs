//! Post entity and body validation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::UserId;

/// Validation errors for post values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    /// The body was empty or whitespace only.
    EmptyBody,
}

impl std::fmt::Display for PostValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBody => write!(f, "post body must not be empty"),
        }
    }
}

impl std::error::Error for PostValidationError {}

/// Free-text body of a post.
///
/// Presence is the only rule enforced here; richer content policies belong to
/// upstream moderation, not this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody(String);

impl PostBody {
    /// Validate and construct a [`PostBody`].
    pub fn new(body: impl Into<String>) -> Result<Self, PostValidationError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(PostValidationError::EmptyBody);
        }
        Ok(Self(body))
    }
}

impl AsRef<str> for PostBody {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for PostBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PostBody> for String {
    fn from(value: PostBody) -> Self {
        value.0
    }
}

/// A persisted post.
///
/// Feed composition only needs `id`, `author`, and `created_at`; the body
/// rides along so adapters can render entries without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: Uuid,
    author: UserId,
    body: PostBody,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Assemble a post from validated components.
    #[must_use]
    pub fn new(id: Uuid, author: UserId, body: PostBody, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author,
            body,
            created_at,
        }
    }

    /// Stable post identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The user who wrote the post.
    #[must_use]
    pub fn author(&self) -> &UserId {
        &self.author
    }

    /// Free-text body.
    #[must_use]
    pub fn body(&self) -> &PostBody {
        &self.body
    }

    /// When the post was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Consume the post, yielding its body.
    #[must_use]
    pub fn into_body(self) -> PostBody {
        self.body
    }
}
