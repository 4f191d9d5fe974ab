//! Completion gateway.
//!
//! Sends one conversation to the configured provider and reduces the outcome
//! to a [`CompletionResult`]. Provider errors never escape this module; they
//! are classified into a [`FailureKind`] for the caller to act on.

use std::sync::Arc;
use std::time::{Duration, Instant};

use sp_domain::error::{Error, FailureKind};
use sp_domain::message::Message;
use sp_domain::trace::TraceEvent;

use crate::traits::{ChatRequest, LlmProvider};

/// Sampling temperature used for every completion.
pub const TEMPERATURE: f32 = 0.7;

/// Output cap, in tokens, for every completion.
pub const MAX_OUTPUT_TOKENS: u32 = 800;

/// Returned in place of an empty completion.
pub const EMPTY_COMPLETION: &str = "No response generated.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    Success(String),
    Failure(FailureKind),
}

/// Classify a provider error.
///
/// The structured [`Error::Auth`] variant is authoritative. Errors from
/// clients that do not use it are sniffed for the case-sensitive phrase
/// `"API key"`. Everything else is transient.
pub fn classify_error(err: &Error) -> FailureKind {
    match err {
        Error::Auth(_) => FailureKind::Auth,
        other if other.to_string().contains("API key") => FailureKind::Auth,
        _ => FailureKind::Transient,
    }
}

/// Single-attempt, time-bounded access to the completion provider.
#[derive(Clone)]
pub struct CompletionGateway {
    provider: Arc<dyn LlmProvider>,
    model: String,
    timeout: Duration,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            provider,
            model: model.into(),
            timeout,
        }
    }

    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one completion. There is no retry: a failed attempt is reported
    /// immediately so the caller can fall back.
    pub async fn complete(&self, messages: &[Message]) -> CompletionResult {
        let req = ChatRequest {
            messages: messages.to_vec(),
            temperature: Some(TEMPERATURE),
            max_tokens: Some(MAX_OUTPUT_TOKENS),
            model: Some(self.model.clone()),
        };

        let provider_id = self.provider.provider_id().to_string();
        let start = Instant::now();

        let outcome = match tokio::time::timeout(self.timeout, self.provider.chat(&req)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(format!(
                "no response within {}ms",
                self.timeout.as_millis()
            ))),
        };
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(resp) => {
                TraceEvent::LlmRequest {
                    provider: provider_id,
                    model: resp.model.clone(),
                    duration_ms,
                    prompt_tokens: resp.usage.map(|u| u.prompt_tokens),
                    completion_tokens: resp.usage.map(|u| u.completion_tokens),
                }
                .emit();

                if resp.content.is_empty() {
                    CompletionResult::Success(EMPTY_COMPLETION.to_string())
                } else {
                    CompletionResult::Success(resp.content)
                }
            }
            Err(e) => {
                let kind = classify_error(&e);
                match kind {
                    FailureKind::Auth => tracing::error!(
                        provider = %provider_id,
                        error = %e,
                        "completion provider rejected credentials"
                    ),
                    FailureKind::Transient => tracing::warn!(
                        provider = %provider_id,
                        duration_ms,
                        error = %e,
                        "completion request failed"
                    ),
                }
                TraceEvent::CompletionFailed {
                    provider: provider_id,
                    kind,
                    duration_ms,
                    error: e.to_string(),
                }
                .emit();
                CompletionResult::Failure(kind)
            }
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
