//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (users, follows,
//!   feed, posts, engagement, health)
//! - **Schemas**: Domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`UserSchema`]) that provide OpenAPI definitions without coupling domain
//!   types to the utoipa framework
//! - **Security**: Session cookie authentication scheme
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Murmuration backend API",
        description = "HTTP interface for the follow graph, home feed, posts, \
                       likes, comments, profiles, and health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::current_user,
        crate::inbound::http::users::user_profile,
        crate::inbound::http::follows::follow_user,
        crate::inbound::http::follows::unfollow_user,
        crate::inbound::http::follows::follow_status,
        crate::inbound::http::feed::home_feed,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::my_posts,
        crate::inbound::http::posts::delete_post,
        crate::inbound::http::engagement::like_post,
        crate::inbound::http::engagement::unlike_post,
        crate::inbound::http::engagement::like_summary,
        crate::inbound::http::engagement::add_comment,
        crate::inbound::http::engagement::post_comments,
        crate::inbound::http::engagement::delete_comment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "Login, identity, and public profiles"),
        (name = "follows", description = "Directed follow relationships"),
        (name = "feed", description = "Home feed composition"),
        (name = "posts", description = "Authoring and removing posts"),
        (name = "engagement", description = "Likes and comments on posts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
