//! Home feed HTTP handler.
//!
//! ```text
//! GET /api/v1/feed
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::HomeFeedRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::posts::PostResponseBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Response payload for the home feed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponseBody {
    pub entries: Vec<PostResponseBody>,
}

/// Compose the viewer's home feed, newest first.
///
/// Anonymous viewers receive an empty feed rather than an authentication
/// error so clients can render a logged-out timeline shell.
#[utoipa::path(
    get,
    path = "/api/v1/feed",
    responses(
        (
            status = 200,
            description = "Home feed entries, newest first",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = FeedResponseBody
        ),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["feed"],
    operation_id = "homeFeed",
    security(("SessionCookie" = []))
)]
#[get("/feed")]
pub async fn home_feed(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let viewer = session.user_id()?;
    let response = state.feed.home_feed(HomeFeedRequest { viewer }).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(FeedResponseBody {
            entries: response.entries.into_iter().map(Into::into).collect(),
        }))
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
