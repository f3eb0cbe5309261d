//! Backend connection settings.

use std::time::Duration;

/// Default whiteboard API base URL.
pub const DEFAULT_WHITEBOARD_API_URL: &str =
    "https://defaultmission.localhost/explorer/explorer/api/whiteboard";

/// Where the whiteboard backend lives and how long the transport may wait on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhiteboardConfig {
    base_url: String,
    /// Transport-level limit. `None` leaves reqwest's default (no timeout).
    request_timeout: Option<Duration>,
}

impl WhiteboardConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: None,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WHITEBOARD_API_URL)
    }
}
