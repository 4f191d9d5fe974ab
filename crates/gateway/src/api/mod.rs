pub mod chat;
pub mod health;
pub mod topics;

use std::any::Any;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error::{api_error, INTERNAL_ERROR_MESSAGE};
use crate::state::AppState;

/// Build the full API router with state applied.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        // Operational
        .route("/health", get(health::health))
        .route("/api/readiness", get(health::readiness))
        // Assistant
        .route("/api/chat", post(chat::chat))
        .route("/api/store-info", post(topics::store_info))
        .route("/api/vendor-info", post(topics::vendor_info))
        .route("/api/task-info", post(topics::task_info))
        .route("/api/assistant", post(topics::assistant));

    with_request_layers(routes).with_state(state)
}

/// Wrap `routes` in the per-request layers.
///
/// Every request runs inside an `http_request` span carrying a fresh
/// request id. A panicking handler is turned into the generic 500 body.
pub fn with_request_layers<S>(routes: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
            tracing::info_span!(
                "http_request",
                request_id = %uuid::Uuid::new_v4(),
                method = %req.method(),
                path = %req.uri().path(),
            )
        }))
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = %detail, "handler panicked");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}
