//! Follow graph HTTP handlers.
//!
//! ```text
//! POST /api/v1/users/{user_id}/follow
//! DELETE /api/v1/users/{user_id}/follow
//! GET /api/v1/users/{user_id}/follow
//! ```
//!
//! The authenticated session user is always the follower; the path id names
//! the target.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{FollowRelationshipRequest, FollowUserRequest, UnfollowUserRequest};
use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

#[derive(Debug, Deserialize)]
struct FollowPath {
    user_id: String,
}

fn parse_target_id(path: FollowPath) -> Result<UserId, Error> {
    parse_uuid(path.user_id, FieldName::new("userId")).map(UserId::from_uuid)
}

/// Response payload after following a user.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponseBody {
    pub following: bool,
}

/// Response payload after unfollowing a user.
///
/// `removed` is false when no edge existed; the request still succeeds.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfollowResponseBody {
    pub following: bool,
    pub removed: bool,
}

/// Response payload reporting the state of one follow relationship.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatusResponseBody {
    pub following: bool,
}

/// Follow the target user.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/follow",
    params(("user_id" = String, Path, description = "User to follow")),
    responses(
        (status = 201, description = "Follow edge created", body = FollowResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Target user not found", body = ErrorSchema),
        (status = 409, description = "Already following", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "followUser",
    security(("SessionCookie" = []))
)]
#[post("/users/{user_id}/follow")]
pub async fn follow_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<FollowPath>,
) -> ApiResult<HttpResponse> {
    let follower = session.require_user_id()?;
    let following = parse_target_id(path.into_inner())?;
    let response = state
        .follows
        .follow(FollowUserRequest {
            follower,
            following,
        })
        .await?;
    Ok(HttpResponse::Created().json(FollowResponseBody {
        following: response.following,
    }))
}

/// Unfollow the target user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/follow",
    params(("user_id" = String, Path, description = "User to unfollow")),
    responses(
        (status = 200, description = "Unfollow outcome", body = UnfollowResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "unfollowUser",
    security(("SessionCookie" = []))
)]
#[delete("/users/{user_id}/follow")]
pub async fn unfollow_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<FollowPath>,
) -> ApiResult<web::Json<UnfollowResponseBody>> {
    let follower = session.require_user_id()?;
    let following = parse_target_id(path.into_inner())?;
    let response = state
        .follows
        .unfollow(UnfollowUserRequest {
            follower,
            following,
        })
        .await?;
    Ok(web::Json(UnfollowResponseBody {
        following: response.following,
        removed: response.removed,
    }))
}

/// Report whether the authenticated user follows the target.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/follow",
    params(("user_id" = String, Path, description = "Relationship target")),
    responses(
        (status = 200, description = "Relationship state", body = FollowStatusResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "followStatus",
    security(("SessionCookie" = []))
)]
#[get("/users/{user_id}/follow")]
pub async fn follow_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<FollowPath>,
) -> ApiResult<web::Json<FollowStatusResponseBody>> {
    let follower = session.require_user_id()?;
    let following = parse_target_id(path.into_inner())?;
    let response = state
        .follows_query
        .relationship(FollowRelationshipRequest {
            follower,
            following,
        })
        .await?;
    Ok(web::Json(FollowStatusResponseBody {
        following: response.following,
    }))
}

#[cfg(test)]
#[path = "follows_tests.rs"]
mod tests;
