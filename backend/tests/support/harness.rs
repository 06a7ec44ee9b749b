//! Server harness and shared world for the HTTP behaviour suites.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The spawned server wires the real
//! domain services over in-memory stores, so scenarios exercise the whole
//! stack from HTTP request to storage. The `WorldFixture` ensures the server
//! is stopped even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Key, SameSite, time::Duration as CookieDuration};
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use chrono::{DateTime, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use uuid::Uuid;

use crate::doubles::{
    InMemoryCommentStore, InMemoryFollowStore, InMemoryIdentityDirectory, InMemoryLikeStore,
    InMemoryPostStore, MutableClock,
};
use backend::Trace;
use backend::domain::ports::{FIXTURE_LOGIN_USER_ID, FIXTURE_LOGIN_USERNAME, FixtureLoginService};
use backend::domain::{
    CurrentUserQueryService, EngagementCommandService, EngagementQueryService, FeedQueryService,
    FollowCommandService, FollowQueryService, PostCommandService, PostQueryService,
    ProfileQueryService, User,
};
use backend::inbound::http::engagement::{
    add_comment as add_comment_handler, delete_comment as delete_comment_handler,
    like_post as like_post_handler, like_summary as like_summary_handler,
    post_comments as post_comments_handler, unlike_post as unlike_post_handler,
};
use backend::inbound::http::feed::home_feed as home_feed_handler;
use backend::inbound::http::follows::{
    follow_status as follow_status_handler, follow_user as follow_user_handler,
    unfollow_user as unfollow_user_handler,
};
use backend::inbound::http::posts::{
    create_post as create_post_handler, delete_post as delete_post_handler,
    my_posts as my_posts_handler,
};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::inbound::http::users::{
    current_user as current_user_handler, login as login_handler,
    user_profile as user_profile_handler,
};

pub(crate) struct ApiWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) directory: InMemoryIdentityDirectory,
    pub(crate) follow_store: InMemoryFollowStore,
    pub(crate) post_store: InMemoryPostStore,
    pub(crate) like_store: InMemoryLikeStore,
    pub(crate) comment_store: InMemoryCommentStore,
    pub(crate) clock: Arc<MutableClock>,
    pub(crate) seeded_post_id: Option<Uuid>,
    pub(crate) seeded_comment_id: Option<Uuid>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_cache_control: Option<String>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) session_cookie: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<ApiWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

pub(crate) fn shutdown(world: SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it, so we lock the world
    // while calling `block_on`. The future must not try to lock the world.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn test_session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(PersistentSession::default().session_ttl(CookieDuration::hours(2)))
        .build()
}

async fn spawn_api_server(http_state: HttpState) -> Result<(String, ServerHandle), String> {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let http_data = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        let api = web::scope("/api/v1")
            .wrap(test_session_middleware(key.clone()))
            .service(login_handler)
            .service(current_user_handler)
            .service(user_profile_handler)
            .service(follow_user_handler)
            .service(unfollow_user_handler)
            .service(follow_status_handler)
            .service(home_feed_handler)
            .service(create_post_handler)
            .service(my_posts_handler)
            .service(delete_post_handler)
            .service(like_post_handler)
            .service(unlike_post_handler)
            .service(like_summary_handler)
            .service(add_comment_handler)
            .service(post_comments_handler)
            .service(delete_comment_handler);

        App::new()
            .app_data(http_data.clone())
            .wrap(Trace)
            .service(api)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    (runtime, local)
}

fn development_account() -> User {
    User::from_strings(FIXTURE_LOGIN_USER_ID, FIXTURE_LOGIN_USERNAME)
}

/// Fixed start instant so seeded timestamps stay reproducible across runs.
fn feed_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
        .single()
        .expect("valid fixture instant")
}

struct Stores {
    directory: InMemoryIdentityDirectory,
    follow_store: InMemoryFollowStore,
    post_store: InMemoryPostStore,
    like_store: InMemoryLikeStore,
    comment_store: InMemoryCommentStore,
}

fn build_http_state(stores: &Stores, clock: &Arc<MutableClock>) -> HttpState {
    let directory = Arc::new(stores.directory.clone());
    let follow_store = Arc::new(stores.follow_store.clone());
    let post_store = Arc::new(stores.post_store.clone());
    let like_store = Arc::new(stores.like_store.clone());
    let comment_store = Arc::new(stores.comment_store.clone());
    let clock: Arc<dyn Clock> = clock.clone();

    HttpState::new(HttpStatePorts {
        login: Arc::new(FixtureLoginService),
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
    })
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let stores = Stores {
        directory: InMemoryIdentityDirectory::default(),
        follow_store: InMemoryFollowStore::default(),
        post_store: InMemoryPostStore::default(),
        like_store: InMemoryLikeStore::default(),
        comment_store: InMemoryCommentStore::default(),
    };
    let clock = Arc::new(MutableClock::new(feed_epoch()));
    stores.directory.register(development_account());

    let http_state = build_http_state(&stores, &clock);

    let (base_url, server) = local
        .block_on(&runtime, async { spawn_api_server(http_state).await })
        .expect("server should start");

    let Stores {
        directory,
        follow_store,
        post_store,
        like_store,
        comment_store,
    } = stores;

    let world = Rc::new(RefCell::new(ApiWorld {
        runtime,
        local,
        base_url,
        server,
        directory,
        follow_store,
        post_store,
        like_store,
        comment_store,
        clock,
        seeded_post_id: None,
        seeded_comment_id: None,
        last_status: None,
        last_body: None,
        last_cache_control: None,
        last_trace_id: None,
        session_cookie: None,
    }));

    WorldFixture { world }
}
