use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sp_domain::message::Message;

use crate::domain::DomainContext;

/// Subject a topic endpoint scopes the conversation to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Store,
    Vendor,
    Task,
    /// Unscoped assistant: the domain context is used as-is.
    General,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Store, Topic::Vendor, Topic::Task, Topic::General];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Store => "store",
            Topic::Vendor => "vendor",
            Topic::Task => "task",
            Topic::General => "general",
        }
    }

    /// The sentence appended to the domain context for this topic.
    pub fn focus(self) -> Option<&'static str> {
        match self {
            Topic::Store => Some(
                "Focus on providing information about store openings, their progress, budgets, and locations.",
            ),
            Topic::Vendor => Some(
                "Focus on providing information about vendors, their contracts, services, and renewal dates.",
            ),
            Topic::Task => Some(
                "Focus on providing information about tasks, their priorities, due dates, and assignments.",
            ),
            Topic::General => None,
        }
    }

    /// System prompt for this topic: the domain context plus the focus
    /// sentence, if any.
    pub fn system_prompt(self, context: &DomainContext) -> String {
        match self.focus() {
            Some(focus) => format!("{}\n\n{focus}", context.as_str()),
            None => context.as_str().to_string(),
        }
    }

    /// Build the two-message conversation sent for a single topic query.
    pub fn conversation(self, context: &DomainContext, query: &str) -> Vec<Message> {
        vec![
            Message::system(self.system_prompt(context)),
            Message::user(query),
        ]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "store" | "stores" => Ok(Topic::Store),
            "vendor" | "vendors" => Ok(Topic::Vendor),
            "task" | "tasks" => Ok(Topic::Task),
            "general" | "assistant" => Ok(Topic::General),
            other => Err(format!(
                "unknown topic '{other}' (expected store, vendor, task or general)"
            )),
        }
    }
}
