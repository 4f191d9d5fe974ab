use sp_domain::error::FailureKind;
use sp_domain::message::{last_user_text, Message};
use sp_domain::trace::TraceEvent;

use crate::rules::{find_rule, DEFAULT_RESPONSE};

/// Returned for every credential failure, whatever was asked.
pub const AUTH_FAILURE_MESSAGE: &str =
    "The OpenAI API key is missing or invalid. Please check your configuration.";

/// Produce a deterministic answer for a failed completion.
///
/// Only the most recent user message is consulted; earlier turns are
/// ignored.
pub fn fallback(messages: &[Message], kind: FailureKind) -> &'static str {
    let (rule, response) = match kind {
        FailureKind::Auth => ("auth", AUTH_FAILURE_MESSAGE),
        FailureKind::Transient => {
            let text = last_user_text(messages).to_lowercase();
            match find_rule(&text) {
                Some(rule) => (rule.name, rule.response),
                None => ("default", DEFAULT_RESPONSE),
            }
        }
    };

    tracing::debug!(kind = %kind, rule, "serving fallback response");
    TraceEvent::FallbackServed {
        kind,
        rule: rule.to_string(),
    }
    .emit();

    response
}
