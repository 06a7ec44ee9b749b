//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::ports::{
    FixtureCurrentUserQuery, FixtureEngagementCommand, FixtureEngagementQuery, FixtureFeedQuery,
    FixtureFollowCommand, FixtureFollowQuery, FixtureLoginService, FixturePostCommand,
    FixturePostQuery, FixtureProfileQuery,
};
use crate::inbound::http::state::HttpStatePorts;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Ports bundle backed entirely by fixtures.
///
/// Handler tests start from this bundle and replace the single port under
/// test with a stub or mock.
pub fn fixture_state_ports() -> HttpStatePorts {
    HttpStatePorts {
        login: Arc::new(FixtureLoginService),
        identity: Arc::new(FixtureCurrentUserQuery),
        profiles: Arc::new(FixtureProfileQuery),
        follows: Arc::new(FixtureFollowCommand),
        follows_query: Arc::new(FixtureFollowQuery),
        feed: Arc::new(FixtureFeedQuery),
        posts: Arc::new(FixturePostCommand),
        posts_query: Arc::new(FixturePostQuery),
        engagement: Arc::new(FixtureEngagementCommand),
        engagement_query: Arc::new(FixtureEngagementQuery),
    }
}
