//! Like and comment HTTP handlers.
//!
//! ```text
//! POST /api/v1/posts/{post_id}/like
//! DELETE /api/v1/posts/{post_id}/like
//! GET /api/v1/posts/{post_id}/likes
//! POST /api/v1/posts/{post_id}/comments {"body":"nice"}
//! GET /api/v1/posts/{post_id}/comments
//! DELETE /api/v1/comments/{comment_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::ports::{
    AddCommentRequest, CommentPayload, DeleteCommentRequest, LikePostRequest, LikeSummaryRequest,
    PostCommentsRequest, UnlikePostRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

#[derive(Debug, Deserialize)]
struct PostPath {
    post_id: String,
}

#[derive(Debug, Deserialize)]
struct CommentPath {
    comment_id: String,
}

fn parse_post_id(path: PostPath) -> Result<Uuid, Error> {
    parse_uuid(path.post_id, FieldName::new("postId"))
}

fn parse_comment_id(path: CommentPath) -> Result<Uuid, Error> {
    parse_uuid(path.comment_id, FieldName::new("commentId"))
}

/// Response payload after liking a post.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponseBody {
    pub liked: bool,
}

/// Response payload after unliking a post.
///
/// `removed` is false when no like existed; the request still succeeds.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnlikeResponseBody {
    pub liked: bool,
    pub removed: bool,
}

/// Aggregate like state of a post for the requesting viewer.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeSummaryResponseBody {
    pub count: u64,
    pub liked_by_viewer: bool,
}

/// Request payload for commenting on a post.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequestBody {
    pub body: String,
}

/// One comment as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub post_id: String,
    #[schema(format = "uuid")]
    pub author_id: String,
    pub body: String,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<CommentPayload> for CommentResponseBody {
    fn from(comment: CommentPayload) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            author_id: comment.author_id.to_string(),
            body: comment.body,
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

/// Response payload listing a post's comments.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentsResponseBody {
    pub comments: Vec<CommentResponseBody>,
}

/// Response payload after deleting a comment.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentResponseBody {
    pub deleted: bool,
}

/// Like a post as the authenticated user.
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/like",
    params(("post_id" = String, Path, description = "Post identifier")),
    responses(
        (status = 201, description = "Like recorded", body = LikeResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema),
        (status = 409, description = "Already liked", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "likePost",
    security(("SessionCookie" = []))
)]
#[post("/posts/{post_id}/like")]
pub async fn like_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<PostPath>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    let post_id = parse_post_id(path.into_inner())?;
    let response = state
        .engagement
        .like(LikePostRequest { user, post_id })
        .await?;
    Ok(HttpResponse::Created().json(LikeResponseBody {
        liked: response.liked,
    }))
}

/// Remove the authenticated user's like from a post.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}/like",
    params(("post_id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Unlike outcome", body = UnlikeResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "unlikePost",
    security(("SessionCookie" = []))
)]
#[delete("/posts/{post_id}/like")]
pub async fn unlike_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<PostPath>,
) -> ApiResult<web::Json<UnlikeResponseBody>> {
    let user = session.require_user_id()?;
    let post_id = parse_post_id(path.into_inner())?;
    let response = state
        .engagement
        .unlike(UnlikePostRequest { user, post_id })
        .await?;
    Ok(web::Json(UnlikeResponseBody {
        liked: response.liked,
        removed: response.removed,
    }))
}

/// Aggregate like state of a post for the optional viewer.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/likes",
    params(("post_id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Like summary", body = LikeSummaryResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "likeSummary",
    security(("SessionCookie" = []))
)]
#[get("/posts/{post_id}/likes")]
pub async fn like_summary(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<PostPath>,
) -> ApiResult<web::Json<LikeSummaryResponseBody>> {
    let viewer = session.user_id()?;
    let post_id = parse_post_id(path.into_inner())?;
    let response = state
        .engagement_query
        .like_summary(LikeSummaryRequest { viewer, post_id })
        .await?;
    Ok(web::Json(LikeSummaryResponseBody {
        count: response.count,
        liked_by_viewer: response.liked_by_viewer,
    }))
}

/// Comment on a post as the authenticated user.
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    request_body = CommentRequestBody,
    params(("post_id" = String, Path, description = "Post identifier")),
    responses(
        (status = 201, description = "Comment created", body = CommentResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "addComment",
    security(("SessionCookie" = []))
)]
#[post("/posts/{post_id}/comments")]
pub async fn add_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<PostPath>,
    payload: web::Json<CommentRequestBody>,
) -> ApiResult<HttpResponse> {
    let author = session.require_user_id()?;
    let post_id = parse_post_id(path.into_inner())?;
    let response = state
        .engagement
        .add_comment(AddCommentRequest {
            author,
            post_id,
            body: payload.into_inner().body,
        })
        .await?;
    Ok(HttpResponse::Created().json(CommentResponseBody::from(response.comment)))
}

/// List a post's comments, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    params(("post_id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Comments, oldest first", body = PostCommentsResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "postComments",
    security([])
)]
#[get("/posts/{post_id}/comments")]
pub async fn post_comments(
    state: web::Data<HttpState>,
    path: web::Path<PostPath>,
) -> ApiResult<web::Json<PostCommentsResponseBody>> {
    let post_id = parse_post_id(path.into_inner())?;
    let response = state
        .engagement_query
        .comments(PostCommentsRequest { post_id })
        .await?;
    Ok(web::Json(PostCommentsResponseBody {
        comments: response.comments.into_iter().map(Into::into).collect(),
    }))
}

/// Delete a comment as its author or as the commented post's owner.
#[utoipa::path(
    delete,
    path = "/api/v1/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Comment deleted", body = DeleteCommentResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the author or post owner", body = ErrorSchema),
        (status = 404, description = "Comment not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "deleteComment",
    security(("SessionCookie" = []))
)]
#[delete("/comments/{comment_id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<CommentPath>,
) -> ApiResult<web::Json<DeleteCommentResponseBody>> {
    let requester = session.require_user_id()?;
    let comment_id = parse_comment_id(path.into_inner())?;
    let response = state
        .engagement
        .delete_comment(DeleteCommentRequest {
            requester,
            comment_id,
        })
        .await?;
    Ok(web::Json(DeleteCommentResponseBody {
        deleted: response.deleted,
    }))
}

#[cfg(test)]
#[path = "engagement_tests.rs"]
mod tests;
