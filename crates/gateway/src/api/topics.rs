//! Single-query topic endpoints.
//!
//! All four share one body shape, `{ "query": string }`, and differ only in
//! the topic they hand to the assistant.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use serde_json::Value;

use sp_contextpack::Topic;

use crate::error::ApiError;
use crate::state::AppState;

type JsonBody = Result<Json<Value>, JsonRejection>;
type Reply = Result<Json<Value>, ApiError>;

pub async fn store_info(State(state): State<AppState>, body: JsonBody) -> Reply {
    answer(&state, Topic::Store, body).await
}

pub async fn vendor_info(State(state): State<AppState>, body: JsonBody) -> Reply {
    answer(&state, Topic::Vendor, body).await
}

pub async fn task_info(State(state): State<AppState>, body: JsonBody) -> Reply {
    answer(&state, Topic::Task, body).await
}

pub async fn assistant(State(state): State<AppState>, body: JsonBody) -> Reply {
    answer(&state, Topic::General, body).await
}

async fn answer(state: &AppState, topic: Topic, body: JsonBody) -> Reply {
    let Json(body) = body.map_err(|e| ApiError::validation(format!("invalid JSON body: {e}")))?;
    let query = extract_query(&body)?;

    let answer = state.assistant.ask(topic, query).await;
    Ok(Json(serde_json::json!({ "response": answer.text })))
}

/// Pull a usable `query` out of the request body. Any non-empty string is
/// accepted and passed on as sent, whitespace included.
pub fn extract_query(body: &Value) -> Result<&str, ApiError> {
    match body.get("query") {
        None | Some(Value::Null) => Err(ApiError::validation("query is required")),
        Some(Value::String(q)) if q.is_empty() => {
            Err(ApiError::validation("query must not be empty"))
        }
        Some(Value::String(q)) => Ok(q),
        Some(_) => Err(ApiError::validation("query must be a string")),
    }
}
