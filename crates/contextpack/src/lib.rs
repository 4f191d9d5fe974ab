//! Domain grounding for assistant conversations.
//!
//! Holds the built-in domain context, the per-topic system prompts, and the
//! injector that guarantees a conversation carries exactly one system
//! message before it reaches the completion provider.

pub mod builder;
pub mod domain;
pub mod injection;

pub use builder::Topic;
pub use domain::{DomainContext, DEFAULT_DOMAIN_CONTEXT};
pub use injection::inject_context;
