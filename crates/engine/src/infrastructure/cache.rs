//! Last-saved scene version per collaboration session.
//!
//! Lets a save skip the network when the scene has not changed since the
//! last confirmed write. Entries live until the session is torn down and
//! `forget` is called; nothing expires on its own.

use boardsync_domain::{SceneVersion, SessionId};
use dashmap::DashMap;

/// Thread-safe map from session to the scene version the backend last confirmed.
///
/// Best effort only. Two saves racing on the same session may leave the
/// older version behind, which costs at most one redundant write later.
#[derive(Debug, Default)]
pub struct SceneVersionCache {
    entries: DashMap<SessionId, SceneVersion>,
}

impl SceneVersionCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, session: &SessionId) -> Option<SceneVersion> {
        self.entries.get(session).map(|entry| *entry.value())
    }

    /// Record a version the backend confirmed, replacing any earlier one.
    pub fn record(&self, session: SessionId, version: SceneVersion) {
        self.entries.insert(session, version);
    }

    /// True when `version` is exactly what was last confirmed for `session`.
    pub fn is_current(&self, session: &SessionId, version: SceneVersion) -> bool {
        self.get(session) == Some(version)
    }

    /// Drop a session's entry. Call on session teardown.
    pub fn forget(&self, session: &SessionId) -> Option<SceneVersion> {
        self.entries.remove(session).map(|(_, version)| version)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
