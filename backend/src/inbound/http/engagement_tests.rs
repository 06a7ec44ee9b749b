//! Tests for like and comment HTTP handlers.

use super::*;
use crate::domain::ports::{
    AddCommentResponse, DeleteCommentResponse, EngagementCommand, EngagementQuery,
    FIXTURE_LOGIN_USER_ID, LikePostResponse, LikeSummaryResponse, PostCommentsResponse,
    UnlikePostResponse,
};
use crate::inbound::http::state::HttpStatePorts;
use crate::inbound::http::test_utils::fixture_state_ports;
use crate::inbound::http::users::LoginRequest;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rstest::rstest;
use serde_json::Value;
use std::sync::Arc;

fn test_app_with(
    ports: HttpStatePorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(ports)))
        .wrap(crate::inbound::http::test_utils::test_session_middleware())
        .service(
            web::scope("/api/v1")
                .service(crate::inbound::http::users::login)
                .service(like_post)
                .service(unlike_post)
                .service(like_summary)
                .service(add_comment)
                .service(post_comments)
                .service(delete_comment),
        )
}

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with(fixture_state_ports())
}

async fn login_and_get_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> actix_web::cookie::Cookie<'static> {
    let login_req = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(&LoginRequest {
            username: "admin".into(),
            password: "password".into(),
        })
        .to_request();
    let login_res = actix_test::call_service(app, login_req).await;
    assert!(login_res.status().is_success());
    login_res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

fn fixture_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-01T10:00:00Z")
        .expect("fixture timestamp")
        .with_timezone(&Utc)
}

/// Command double where every engagement write succeeds.
struct RecordingEngagementCommand;

#[async_trait]
impl EngagementCommand for RecordingEngagementCommand {
    async fn like(&self, _request: LikePostRequest) -> Result<LikePostResponse, Error> {
        Ok(LikePostResponse { liked: true })
    }

    async fn unlike(&self, _request: UnlikePostRequest) -> Result<UnlikePostResponse, Error> {
        Ok(UnlikePostResponse {
            liked: false,
            removed: true,
        })
    }

    async fn add_comment(&self, request: AddCommentRequest) -> Result<AddCommentResponse, Error> {
        Ok(AddCommentResponse {
            comment: CommentPayload {
                id: Uuid::new_v4(),
                post_id: request.post_id,
                author_id: request.author,
                body: request.body,
                created_at: fixture_timestamp(),
            },
        })
    }

    async fn delete_comment(
        &self,
        _request: DeleteCommentRequest,
    ) -> Result<DeleteCommentResponse, Error> {
        Ok(DeleteCommentResponse { deleted: true })
    }
}

/// Command double where writes are refused for authorisation reasons.
struct RefusingEngagementCommand;

#[async_trait]
impl EngagementCommand for RefusingEngagementCommand {
    async fn like(&self, _request: LikePostRequest) -> Result<LikePostResponse, Error> {
        Err(Error::conflict("post already liked"))
    }

    async fn unlike(&self, _request: UnlikePostRequest) -> Result<UnlikePostResponse, Error> {
        Ok(UnlikePostResponse {
            liked: false,
            removed: false,
        })
    }

    async fn add_comment(&self, request: AddCommentRequest) -> Result<AddCommentResponse, Error> {
        Err(Error::not_found(format!(
            "post {} not found",
            request.post_id
        )))
    }

    async fn delete_comment(
        &self,
        _request: DeleteCommentRequest,
    ) -> Result<DeleteCommentResponse, Error> {
        Err(Error::forbidden(
            "only the comment author or the post owner may delete a comment",
        ))
    }
}

/// Query double for a post with three likes and two comments.
struct PopularPostQuery;

#[async_trait]
impl EngagementQuery for PopularPostQuery {
    async fn like_summary(
        &self,
        request: LikeSummaryRequest,
    ) -> Result<LikeSummaryResponse, Error> {
        Ok(LikeSummaryResponse {
            count: 3,
            liked_by_viewer: request.viewer.is_some(),
        })
    }

    async fn comments(&self, request: PostCommentsRequest) -> Result<PostCommentsResponse, Error> {
        let author = crate::domain::UserId::from_uuid(Uuid::nil());
        Ok(PostCommentsResponse {
            comments: vec![
                CommentPayload {
                    id: Uuid::new_v4(),
                    post_id: request.post_id,
                    author_id: author.clone(),
                    body: "first comment".to_owned(),
                    created_at: fixture_timestamp(),
                },
                CommentPayload {
                    id: Uuid::new_v4(),
                    post_id: request.post_id,
                    author_id: author,
                    body: "second comment".to_owned(),
                    created_at: fixture_timestamp() + Duration::minutes(2),
                },
            ],
        })
    }
}

#[actix_web::test]
async fn like_requires_authenticated_session() {
    let app = actix_test::init_service(test_app()).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/posts/{}/like", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn like_reports_unknown_post_as_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/posts/{}/like", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn like_records_the_like() {
    let app = actix_test::init_service(test_app_with(HttpStatePorts {
        engagement: Arc::new(RecordingEngagementCommand),
        ..fixture_state_ports()
    }))
    .await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/posts/{}/like", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value.get("liked").and_then(Value::as_bool), Some(true));
}

#[actix_web::test]
async fn duplicate_like_reports_conflict() {
    let app = actix_test::init_service(test_app_with(HttpStatePorts {
        engagement: Arc::new(RefusingEngagementCommand),
        ..fixture_state_ports()
    }))
    .await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/posts/{}/like", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn unlike_without_a_like_still_succeeds() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/posts/{}/like", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.status().is_success());
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value.get("liked").and_then(Value::as_bool), Some(false));
    assert_eq!(value.get("removed").and_then(Value::as_bool), Some(false));
}

#[actix_web::test]
async fn unlike_reports_the_removed_like() {
    let app = actix_test::init_service(test_app_with(HttpStatePorts {
        engagement: Arc::new(RecordingEngagementCommand),
        ..fixture_state_ports()
    }))
    .await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/posts/{}/like", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.status().is_success());
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value.get("removed").and_then(Value::as_bool), Some(true));
}

#[actix_web::test]
async fn like_summary_is_visible_to_anonymous_viewers() {
    let app = actix_test::init_service(test_app_with(HttpStatePorts {
        engagement_query: Arc::new(PopularPostQuery),
        ..fixture_state_ports()
    }))
    .await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{}/likes", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert!(response.status().is_success());
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value.get("count").and_then(Value::as_u64), Some(3));
    assert_eq!(
        value.get("likedByViewer").and_then(Value::as_bool),
        Some(false)
    );
}

#[actix_web::test]
async fn like_summary_marks_the_viewer_like() {
    let app = actix_test::init_service(test_app_with(HttpStatePorts {
        engagement_query: Arc::new(PopularPostQuery),
        ..fixture_state_ports()
    }))
    .await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{}/likes", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.status().is_success());
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        value.get("likedByViewer").and_then(Value::as_bool),
        Some(true)
    );
}

#[actix_web::test]
async fn add_comment_requires_authenticated_session() {
    let app = actix_test::init_service(test_app()).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/posts/{}/comments", Uuid::new_v4()))
            .set_json(CommentRequestBody {
                body: "nice".into(),
            })
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn add_comment_reports_unknown_post_as_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/posts/{}/comments", Uuid::new_v4()))
        .cookie(cookie)
        .set_json(CommentRequestBody {
            body: "nice".into(),
        })
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn add_comment_echoes_the_created_comment() {
    let app = actix_test::init_service(test_app_with(HttpStatePorts {
        engagement: Arc::new(RecordingEngagementCommand),
        ..fixture_state_ports()
    }))
    .await;
    let cookie = login_and_get_cookie(&app).await;
    let post_id = Uuid::new_v4();

    let request = actix_test::TestRequest::post()
        .uri(&format!("/api/v1/posts/{post_id}/comments"))
        .cookie(cookie)
        .set_json(CommentRequestBody {
            body: "great post".into(),
        })
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value.get("body").and_then(Value::as_str), Some("great post"));
    assert_eq!(
        value.get("postId").and_then(Value::as_str),
        Some(post_id.to_string().as_str())
    );
    assert_eq!(
        value.get("authorId").and_then(Value::as_str),
        Some(FIXTURE_LOGIN_USER_ID)
    );
    assert_eq!(
        value.get("createdAt").and_then(Value::as_str),
        Some("2026-03-01T10:00:00+00:00")
    );
}

#[actix_web::test]
async fn post_comments_lists_comments_oldest_first_without_a_session() {
    let app = actix_test::init_service(test_app_with(HttpStatePorts {
        engagement_query: Arc::new(PopularPostQuery),
        ..fixture_state_ports()
    }))
    .await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{}/comments", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert!(response.status().is_success());
    let value: Value = actix_test::read_body_json(response).await;
    let comments = value
        .get("comments")
        .and_then(Value::as_array)
        .expect("comments array");
    assert_eq!(comments.len(), 2);
    assert_eq!(
        comments[0].get("body").and_then(Value::as_str),
        Some("first comment")
    );
    assert_eq!(
        comments[1].get("body").and_then(Value::as_str),
        Some("second comment")
    );
}

#[actix_web::test]
async fn delete_comment_reports_unknown_comment_as_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/comments/{}", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_comment_requires_author_or_post_owner() {
    let app = actix_test::init_service(test_app_with(HttpStatePorts {
        engagement: Arc::new(RefusingEngagementCommand),
        ..fixture_state_ports()
    }))
    .await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/comments/{}", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value.get("code").and_then(Value::as_str), Some("forbidden"));
}

#[actix_web::test]
async fn delete_comment_reports_the_outcome() {
    let app = actix_test::init_service(test_app_with(HttpStatePorts {
        engagement: Arc::new(RecordingEngagementCommand),
        ..fixture_state_ports()
    }))
    .await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/comments/{}", Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert!(response.status().is_success());
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value.get("deleted").and_then(Value::as_bool), Some(true));
}

#[rstest]
#[case::like("/api/v1/posts/not-a-uuid/like", "postId")]
#[case::comment("/api/v1/comments/not-a-uuid", "commentId")]
#[actix_web::test]
async fn malformed_identifiers_are_rejected(#[case] uri: &str, #[case] field: &str) {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::delete()
        .uri(uri)
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    let details = value
        .get("details")
        .and_then(|v| v.as_object())
        .expect("details present");
    assert_eq!(details.get("field").and_then(Value::as_str), Some(field));
    assert_eq!(
        details.get("code").and_then(Value::as_str),
        Some("invalid_uuid")
    );
}
