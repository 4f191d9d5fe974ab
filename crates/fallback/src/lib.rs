//! Deterministic answers for when the completion provider cannot respond.
//!
//! Credential failures get a fixed configuration message. Every other
//! failure is answered from an ordered keyword table matched against the
//! last user message.

pub mod responder;
pub mod rules;

pub use responder::{fallback, AUTH_FAILURE_MESSAGE};
pub use rules::{FallbackRule, DEFAULT_RESPONSE, RULES};
