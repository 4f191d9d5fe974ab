use std::sync::Arc;

use chrono::{DateTime, Utc};
use sp_domain::config::Config;

use crate::assistant::Assistant;

/// Shared application state passed to all API handlers.
///
/// Everything here is fixed at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assistant: Arc<Assistant>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Arc<Config>, assistant: Assistant) -> Self {
        Self {
            config,
            assistant: Arc::new(assistant),
            started_at: Utc::now(),
        }
    }
}
