//! Shared HTTP helpers for the API behaviour suites.
//!
//! Requests run through `awc` against the harness server and record the
//! outcome on the world, so step functions only assert on the captured
//! status, headers, and body.

use actix_web::http::{Method, header};
use awc::Client;
use serde_json::{Value, json};

use crate::harness::{SharedWorld, with_world_async};
use backend::domain::TRACE_ID_HEADER;
use backend::domain::ports::{FIXTURE_LOGIN_PASSWORD, FIXTURE_LOGIN_USERNAME};

pub(crate) struct JsonRequest<'a> {
    pub(crate) include_cookie: bool,
    pub(crate) method: Method,
    pub(crate) path: &'a str,
    pub(crate) payload: Option<Value>,
}

struct CapturedResponse {
    status: u16,
    cache_control: Option<String>,
    trace_id: Option<String>,
    body: Option<Value>,
}

fn record_response(world: &SharedWorld, captured: CapturedResponse) {
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_cache_control = captured.cache_control;
    ctx.last_trace_id = captured.trace_id;
    ctx.last_body = captured.body;
}

fn session_cookie(world: &SharedWorld) -> String {
    let ctx = world.borrow();
    let cookie = ctx
        .session_cookie
        .as_deref()
        .expect("session cookie should be stored before authenticated requests");
    cookie
        .split(';')
        .next()
        .expect("cookie header should contain a name=value pair")
        .to_owned()
}

/// Logs in as the development account and stores the session cookie.
pub(crate) fn login_and_store_cookie(world: &SharedWorld) {
    let set_cookie = with_world_async(world, |base_url| async move {
        let client = Client::default();
        let response = client
            .post(format!("{base_url}/api/v1/login"))
            .send_json(&json!({
                "username": FIXTURE_LOGIN_USERNAME,
                "password": FIXTURE_LOGIN_PASSWORD,
            }))
            .await
            .expect("login request should reach the server");
        assert_eq!(response.status().as_u16(), 200, "login should succeed");
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    });

    let mut ctx = world.borrow_mut();
    ctx.session_cookie = set_cookie;
    ctx.last_status = None;
    ctx.last_body = None;
    ctx.last_cache_control = None;
    ctx.last_trace_id = None;
}

/// Sends one JSON request and records status, headers, and body on the world.
pub(crate) fn perform_json_request(world: &SharedWorld, spec: JsonRequest<'_>) {
    // Clone the cookie before entering the async block; the future must not
    // borrow the world while the `LocalSet` drives it.
    let cookie = spec.include_cookie.then(|| session_cookie(world));

    let captured = with_world_async(world, |base_url| async move {
        let client = Client::default();
        let mut request = client.request(spec.method, format!("{base_url}{}", spec.path));
        if let Some(cookie) = cookie {
            request = request.insert_header((header::COOKIE, cookie));
        }

        let mut response = match spec.payload {
            Some(payload) => request.send_json(&payload).await,
            None => request.send().await,
        }
        .expect("request should reach the server");

        let status = response.status().as_u16();
        let cache_control = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let body = response.json::<Value>().await.ok();

        CapturedResponse {
            status,
            cache_control,
            trace_id,
            body,
        }
    });

    record_response(world, captured);
}
