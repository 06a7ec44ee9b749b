//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CurrentUserQuery, EngagementCommand, EngagementQuery, FeedQuery, FollowCommand, FollowQuery,
    LoginService, PostCommand, PostQuery, ProfileQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub identity: Arc<dyn CurrentUserQuery>,
    pub profiles: Arc<dyn ProfileQuery>,
    pub follows: Arc<dyn FollowCommand>,
    pub follows_query: Arc<dyn FollowQuery>,
    pub feed: Arc<dyn FeedQuery>,
    pub posts: Arc<dyn PostCommand>,
    pub posts_query: Arc<dyn PostQuery>,
    pub engagement: Arc<dyn EngagementCommand>,
    pub engagement_query: Arc<dyn EngagementQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub identity: Arc<dyn CurrentUserQuery>,
    pub profiles: Arc<dyn ProfileQuery>,
    pub follows: Arc<dyn FollowCommand>,
    pub follows_query: Arc<dyn FollowQuery>,
    pub feed: Arc<dyn FeedQuery>,
    pub posts: Arc<dyn PostCommand>,
    pub posts_query: Arc<dyn PostQuery>,
    pub engagement: Arc<dyn EngagementCommand>,
    pub engagement_query: Arc<dyn EngagementQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{
    ///     FixtureCurrentUserQuery, FixtureEngagementCommand, FixtureEngagementQuery,
    ///     FixtureFeedQuery, FixtureFollowCommand, FixtureFollowQuery, FixtureLoginService,
    ///     FixturePostCommand, FixturePostQuery, FixtureProfileQuery,
    /// };
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let ports = HttpStatePorts {
    ///     login: Arc::new(FixtureLoginService),
    ///     identity: Arc::new(FixtureCurrentUserQuery),
    ///     profiles: Arc::new(FixtureProfileQuery),
    ///     follows: Arc::new(FixtureFollowCommand),
    ///     follows_query: Arc::new(FixtureFollowQuery),
    ///     feed: Arc::new(FixtureFeedQuery),
    ///     posts: Arc::new(FixturePostCommand),
    ///     posts_query: Arc::new(FixturePostQuery),
    ///     engagement: Arc::new(FixtureEngagementCommand),
    ///     engagement_query: Arc::new(FixtureEngagementQuery),
    /// };
    /// let state = HttpState::new(ports);
    /// let _feed = state.feed.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            identity,
            profiles,
            follows,
            follows_query,
            feed,
            posts,
            posts_query,
            engagement,
            engagement_query,
        } = ports;
        Self {
            login,
            identity,
            profiles,
            follows,
            follows_query,
            feed,
            posts,
            posts_query,
            engagement,
            engagement_query,
        }
    }
}
