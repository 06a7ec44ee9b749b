//! Post HTTP handlers.
//!
//! ```text
//! POST /api/v1/posts {"body":"hello"}
//! GET /api/v1/posts/mine
//! DELETE /api/v1/posts/{post_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::ports::{AuthorPostsRequest, CreatePostRequest, DeletePostRequest, PostPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct PostPath {
    post_id: String,
}

fn parse_post_id(path: PostPath) -> Result<Uuid, Error> {
    parse_uuid(path.post_id, FieldName::new("postId"))
}

/// Request payload for creating a post.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequestBody {
    pub body: String,
}

/// One post as returned to clients.
///
/// Shared by the feed, profile, and post listings so every surface renders
/// the same shape.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub author_id: String,
    pub body: String,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<PostPayload> for PostResponseBody {
    fn from(post: PostPayload) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id.to_string(),
            body: post.body,
            created_at: post.created_at.to_rfc3339(),
        }
    }
}

/// Response payload for the authenticated user's own posts.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPostsResponseBody {
    pub posts: Vec<PostResponseBody>,
}

/// Response payload for deleting a post.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostResponseBody {
    pub deleted: bool,
}

/// Publish a post authored by the authenticated user.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequestBody,
    responses(
        (status = 201, description = "Post created", body = PostResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "createPost",
    security(("SessionCookie" = []))
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreatePostRequestBody>,
) -> ApiResult<HttpResponse> {
    let author = session.require_user_id()?;
    let response = state
        .posts
        .create_post(CreatePostRequest {
            author,
            body: payload.into_inner().body,
        })
        .await?;
    Ok(HttpResponse::Created().json(PostResponseBody::from(response.post)))
}

/// List the authenticated user's own posts, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/posts/mine",
    responses(
        (status = 200, description = "Own posts, newest first", body = AuthorPostsResponseBody),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "myPosts",
    security(("SessionCookie" = []))
)]
#[get("/posts/mine")]
pub async fn my_posts(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<AuthorPostsResponseBody>> {
    let author = session.require_user_id()?;
    let response = state
        .posts_query
        .posts_by_author(AuthorPostsRequest { author })
        .await?;
    Ok(web::Json(AuthorPostsResponseBody {
        posts: response.posts.into_iter().map(Into::into).collect(),
    }))
}

/// Delete a post owned by the authenticated user.
///
/// A post owned by someone else reports not found so ownership is never
/// revealed.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}",
    params(("post_id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted", body = DeletePostResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "deletePost",
    security(("SessionCookie" = []))
)]
#[delete("/posts/{post_id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<PostPath>,
) -> ApiResult<web::Json<DeletePostResponseBody>> {
    let requester = session.require_user_id()?;
    let post_id = parse_post_id(path.into_inner())?;
    let response = state
        .posts
        .delete_post(DeletePostRequest { requester, post_id })
        .await?;
    Ok(web::Json(DeletePostResponseBody {
        deleted: response.deleted,
    }))
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
