use sp_domain::message::{Message, Role};
use sp_domain::trace::TraceEvent;

use crate::domain::DomainContext;

/// Ensure the conversation is grounded by a system message.
///
/// When no message has role `system`, a `{system, context}` message is
/// prepended. Otherwise the conversation is returned untouched, so applying
/// this twice is the same as applying it once.
pub fn inject_context(mut messages: Vec<Message>, context: &DomainContext) -> Vec<Message> {
    if messages.iter().any(|m| m.role == Role::System) {
        return messages;
    }

    messages.insert(0, Message::system(context.as_str()));

    TraceEvent::ContextInjected {
        context_chars: context.len(),
        messages: messages.len(),
    }
    .emit();

    messages
}
