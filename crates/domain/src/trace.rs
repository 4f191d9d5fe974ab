use serde::Serialize;

use crate::error::FailureKind;

/// Structured trace events emitted across all StorePilot crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    ContextInjected {
        context_chars: usize,
        messages: usize,
    },
    LlmRequest {
        provider: String,
        model: String,
        duration_ms: u64,
        prompt_tokens: Option<u32>,
        completion_tokens: Option<u32>,
    },
    CompletionFailed {
        provider: String,
        kind: FailureKind,
        duration_ms: u64,
        error: String,
    },
    FallbackServed {
        kind: FailureKind,
        rule: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "sp_event");
    }
}
