//! Application state shared across all handlers

use std::sync::Arc;

use chrono::Duration;
use tower_cookies::Key;

use crate::infrastructure::config::Config;
use crate::infrastructure::session::{SessionStore, cookie_key};

#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration
    pub config: Arc<Config>,
    /// Per-browser datasets
    pub sessions: Arc<SessionStore>,
    /// Signs the session cookie
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(Duration::hours(config.session_ttl_hours));
        let cookie_key = cookie_key(&config.session_secret);

        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            cookie_key,
        }
    }
}
