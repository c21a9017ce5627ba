//! API handlers for the record REST endpoints

pub mod openapi;
pub mod records;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Parse the leading integer of a path segment.
///
/// Leading whitespace is skipped and a sign is accepted; anything after the
/// digits is ignored, so `"3abc"` is 3. `None` when no digits are present or
/// the value does not fit.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Logs every request that reaches the record resource
async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        uri = %request.uri(),
        "Record router received a request"
    );
    next.run(request).await
}

/// Routes of the record resource mounted at `base_path`.
///
/// The collection answers on the mount path with and without a trailing slash.
pub fn records_router(state: AppState, base_path: &str) -> Router {
    let prefix = base_path.trim_end_matches('/');
    let collection = || get(records::list_records).post(records::create_record);

    let mut router = Router::new().route(&format!("{}/", prefix), collection());
    if !prefix.is_empty() {
        router = router.route(prefix, collection());
    }

    router
        .route(
            &format!("{}/:id", prefix),
            get(records::get_record)
                .put(records::update_record)
                .delete(records::delete_record),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let base_path = state.config.base_path();
    let docs_enabled = state.config.docs.enabled;
    let mut app = records_router(state, &base_path);

    if docs_enabled {
        app = app.merge(openapi::create_openapi_router(&base_path));
    }

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
