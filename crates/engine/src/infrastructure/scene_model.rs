//! Default scene model backed by the domain's element rules.

use boardsync_domain::{restore_elements, scene_version, SceneElement, SceneVersion};

use crate::infrastructure::ports::SceneModelPort;

/// Sum-of-versions fingerprint and basic record repair.
///
/// Editors with richer element schemas should supply their own `SceneModelPort`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSceneModel;

impl SceneModelPort for DefaultSceneModel {
    fn scene_version(&self, elements: &[SceneElement]) -> SceneVersion {
        scene_version(elements)
    }

    fn restore_elements(&self, raw: Vec<serde_json::Value>) -> Vec<SceneElement> {
        let total = raw.len();
        let restored = restore_elements(raw);
        if restored.len() < total {
            tracing::debug!(
                dropped = total - restored.len(),
                kept = restored.len(),
                "Dropped malformed scene elements during restore"
            );
        }
        restored
    }
}
