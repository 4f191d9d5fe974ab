//! `POST /api/chat`: free-form conversation.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use serde_json::Value;

use sp_domain::message::{Message, Role};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::validation(format!("invalid JSON body: {e}")))?;
    let messages = parse_messages(&body)?;

    let answer = state.assistant.chat(messages).await;
    Ok(Json(serde_json::json!({ "response": answer.text })))
}

/// Validate the `messages` field and convert it to a conversation.
///
/// A caller-supplied system message is only accepted in first position, and
/// only once, so the injected domain context can never be doubled.
pub fn parse_messages(body: &Value) -> Result<Vec<Message>, ApiError> {
    let raw = match body.get("messages") {
        None | Some(Value::Null) => return Err(ApiError::validation("messages is required")),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ApiError::validation("messages must be an array")),
    };
    if raw.is_empty() {
        return Err(ApiError::validation("messages must not be empty"));
    }

    let mut messages = Vec::with_capacity(raw.len());
    for (i, item) in raw.iter().enumerate() {
        let msg: Message = serde_json::from_value(item.clone())
            .map_err(|e| ApiError::validation(format!("messages[{i}] is invalid: {e}")))?;
        if msg.role == Role::System && i > 0 {
            return Err(ApiError::validation(
                "a system message is only allowed as the first message",
            ));
        }
        messages.push(msg);
    }

    Ok(messages)
}
