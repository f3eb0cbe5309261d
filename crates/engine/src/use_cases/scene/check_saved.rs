//! Check whether the backend already holds the current scene.

use std::sync::Arc;

use boardsync_domain::{RoomContext, SceneElement};

use crate::infrastructure::cache::SceneVersionCache;
use crate::infrastructure::ports::SceneModelPort;

/// Answers "is there anything left to save?" without touching the network.
///
/// With no active room there is nowhere to save to, so the answer is yes.
/// Callers use this to decide whether to block leaving the page, and a
/// missing room must never block that.
pub struct CheckSceneSaved {
    scene_model: Arc<dyn SceneModelPort>,
    cache: Arc<SceneVersionCache>,
}

impl CheckSceneSaved {
    pub fn new(scene_model: Arc<dyn SceneModelPort>, cache: Arc<SceneVersionCache>) -> Self {
        Self { scene_model, cache }
    }

    pub fn execute(&self, room: &RoomContext, elements: &[SceneElement]) -> bool {
        match room.active() {
            Some(active) => {
                let version = self.scene_model.scene_version(elements);
                self.cache.is_current(&active.session, version)
            }
            None => true,
        }
    }
}
