//! User and profile HTTP handlers.
//!
//! ```text
//! POST /api/v1/login {"username":"admin","password":"password"}
//! GET /api/v1/users/me
//! GET /api/v1/users/{user_id}/profile
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{ProfilePayload, ProfileRequest};
use crate::domain::{Error, LoginCredentials, LoginValidationError, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::posts::PostResponseBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

#[derive(Debug, Deserialize)]
struct UserPath {
    user_id: String,
}

fn parse_user_id(path: UserPath) -> Result<UserId, Error> {
    parse_uuid(path.user_id, FieldName::new("userId")).map(UserId::from_uuid)
}

/// Login request body for `POST /api/v1/login`.
///
/// Example JSON:
/// `{"username":"admin","password":"password"}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Identity payload returned by login and `GET /users/me`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub username: String,
}

impl From<User> for UserResponseBody {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().as_ref().to_owned(),
        }
    }
}

/// Public profile payload for `GET /users/{user_id}/profile`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub username: String,
    pub follower_count: u64,
    pub following_count: u64,
    pub followed_by_viewer: bool,
    pub posts: Vec<PostResponseBody>,
}

impl From<ProfilePayload> for ProfileResponseBody {
    fn from(profile: ProfilePayload) -> Self {
        Self {
            id: profile.id.to_string(),
            username: profile.username,
            follower_count: profile.follower_count,
            following_count: profile.following_count,
            followed_by_viewer: profile.followed_by_viewer,
            posts: profile.posts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Authenticate credentials and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (
            status = 200,
            description = "Login success",
            headers(("Set-Cookie" = String, description = "Session cookie")),
            body = UserResponseBody
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<UserResponseBody>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(user.id())?;
    Ok(web::Json(UserResponseBody::from(user)))
}

/// Return the authenticated user's own identity.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (
            status = 200,
            description = "Authenticated identity",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = UserResponseBody
        ),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Account no longer exists", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "currentUser",
    security(("SessionCookie" = []))
)]
#[get("/users/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let user = state.identity.current_user(&user_id).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(UserResponseBody::from(user)))
}

/// Fetch a user's public profile as seen by the optional viewer.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/profile",
    params(("user_id" = String, Path, description = "Profile subject identifier")),
    responses(
        (
            status = 200,
            description = "Public profile",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = ProfileResponseBody
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "userProfile",
    security(("SessionCookie" = []))
)]
#[get("/users/{user_id}/profile")]
pub async fn user_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<UserPath>,
) -> ApiResult<HttpResponse> {
    let viewer = session.user_id()?;
    let user_id = parse_user_id(path.into_inner())?;
    let response = state
        .profiles
        .profile(ProfileRequest { viewer, user_id })
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(ProfileResponseBody::from(response.profile)))
}
