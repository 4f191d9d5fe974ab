//! Liveness and readiness probes.

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use chrono::Utc;

use crate::state::AppState;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /health
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds().max(0);
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": state.started_at.to_rfc3339(),
        "uptime_secs": uptime_secs,
    }))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /api/readiness
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Reports whether completions can succeed. Always 200: without a
/// credential the gateway still answers from the fallback table.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let gateway = state.assistant.gateway();
    let has_credential = gateway.provider().has_credential();

    Json(serde_json::json!({
        "ready": has_credential,
        "provider": gateway.provider().provider_id(),
        "model": gateway.model(),
        "credential": if has_credential { "present" } else { "missing" },
    }))
}
