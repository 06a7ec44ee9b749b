//! Builders for HTTP state ports backed by the database or fixtures.

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;

use backend::domain::ports::{
    FixtureCurrentUserQuery, FixtureEngagementCommand, FixtureEngagementQuery, FixtureFeedQuery,
    FixtureFollowCommand, FixtureFollowQuery, FixtureLoginService, FixturePostCommand,
    FixturePostQuery, FixtureProfileQuery,
};
use backend::domain::{
    CurrentUserQueryService, EngagementCommandService, EngagementQueryService, FeedQueryService,
    FollowCommandService, FollowQueryService, PostCommandService, PostQueryService,
    ProfileQueryService,
};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::persistence::{
    DbPool, DieselCommentStore, DieselFollowStore, DieselIdentityDirectory, DieselLikeStore,
    DieselLoginService, DieselPostStore,
};

use super::ServerConfig;

/// Select database-backed ports when a pool is configured, fixtures otherwise.
fn select_state_ports<Pool>(
    pool: &Option<Pool>,
    database: impl FnOnce(&Pool) -> HttpStatePorts,
    fixtures: impl FnOnce() -> HttpStatePorts,
) -> HttpStatePorts {
    match pool {
        Some(pool) => database(pool),
        None => fixtures(),
    }
}

/// Wire every port to its Diesel-backed service over the shared pool.
fn database_state_ports(pool: &DbPool) -> HttpStatePorts {
    let follow_store = Arc::new(DieselFollowStore::new(pool.clone()));
    let post_store = Arc::new(DieselPostStore::new(pool.clone()));
    let like_store = Arc::new(DieselLikeStore::new(pool.clone()));
    let comment_store = Arc::new(DieselCommentStore::new(pool.clone()));
    let directory = Arc::new(DieselIdentityDirectory::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(mockable::DefaultClock);

    HttpStatePorts {
        login: Arc::new(DieselLoginService::new(pool.clone())),
        identity: Arc::new(CurrentUserQueryService::new(directory.clone())),
        profiles: Arc::new(ProfileQueryService::new(
            directory.clone(),
            follow_store.clone(),
            post_store.clone(),
        )),
        follows: Arc::new(FollowCommandService::new(
            follow_store.clone(),
            directory,
            clock.clone(),
        )),
        follows_query: Arc::new(FollowQueryService::new(follow_store.clone())),
        feed: Arc::new(FeedQueryService::new(post_store.clone(), follow_store)),
        posts: Arc::new(PostCommandService::new(post_store.clone(), clock.clone())),
        posts_query: Arc::new(PostQueryService::new(post_store.clone())),
        engagement: Arc::new(EngagementCommandService::new(
            post_store,
            like_store.clone(),
            comment_store.clone(),
            clock,
        )),
        engagement_query: Arc::new(EngagementQueryService::new(like_store, comment_store)),
    }
}

/// Serve the development account from in-memory fixtures.
fn fixture_state_ports() -> HttpStatePorts {
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

/// Build the shared HTTP state from configured ports and fixture fallbacks.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = select_state_ports(&config.db_pool, database_state_ports, fixture_state_ports);
    web::Data::new(HttpState::new(ports))
}
