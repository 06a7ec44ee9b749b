//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence adapters, the services that implement the driving ports, and
//! the port traits themselves. Keep types immutable and document invariants
//! and serialisation contracts (serde) in each type's Rustdoc.

pub mod auth;
pub mod engagement;
mod engagement_service;
pub mod error;
pub mod feed;
mod feed_service;
pub mod follow;
mod follow_service;
pub mod ports;
pub mod post;
mod post_service;
mod profile_service;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::engagement::{
    Comment, CommentBody, EngagementValidationError, LikeSummary, UnlikeOutcome,
};
pub use self::engagement_service::{EngagementCommandService, EngagementQueryService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feed::compose_home_feed;
pub use self::feed_service::FeedQueryService;
pub use self::follow::{FollowEdge, FollowValidationError, UnfollowOutcome};
pub use self::follow_service::{FollowCommandService, FollowQueryService};
pub use self::post::{Post, PostBody, PostValidationError};
pub use self::post_service::{PostCommandService, PostQueryService};
pub use self::profile_service::{CurrentUserQueryService, ProfileQueryService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError, Username};
