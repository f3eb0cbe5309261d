//! Save scene use case - overwrite a room's remote scene document.

use std::sync::Arc;

use boardsync_domain::{RoomContext, SceneDocument, SceneElement};
use serde_json::Value;

use crate::infrastructure::cache::SceneVersionCache;
use crate::infrastructure::ports::{SceneModelPort, SyncError, WhiteboardHttpPort};

/// Writes the full element list to the room's document, at most once per version.
///
/// The write is an unconditional overwrite. The backend's `didUpdate` flag
/// is the only acceptance signal; there is no version compare-and-swap, so
/// concurrent writers to the same room are last-writer-wins.
pub struct SaveScene {
    http: Arc<dyn WhiteboardHttpPort>,
    scene_model: Arc<dyn SceneModelPort>,
    cache: Arc<SceneVersionCache>,
}

impl SaveScene {
    pub fn new(
        http: Arc<dyn WhiteboardHttpPort>,
        scene_model: Arc<dyn SceneModelPort>,
        cache: Arc<SceneVersionCache>,
    ) -> Self {
        Self {
            http,
            scene_model,
            cache,
        }
    }

    /// Save `elements` to the room.
    ///
    /// Returns `Ok(true)` when the backend confirmed the write or when there
    /// was nothing to do (no active room, or this version is already saved).
    /// Returns `Ok(false)` when the backend answered without confirming.
    /// Transport and parse failures are returned as errors.
    pub async fn execute(
        &self,
        room: &RoomContext,
        elements: &[SceneElement],
    ) -> Result<bool, SyncError> {
        let Some(active) = room.active() else {
            tracing::debug!("No active room, skipping scene save");
            return Ok(true);
        };

        let scene_version = self.scene_model.scene_version(elements);
        if self.cache.is_current(&active.session, scene_version) {
            tracing::debug!(
                room_id = %active.room_id,
                scene_version = %scene_version,
                "Scene already saved, skipping"
            );
            return Ok(true);
        }

        let document = SceneDocument {
            scene_version,
            data: elements,
        };
        let body = serde_json::to_vec(&document).map_err(SyncError::serialization)?;

        let reply = self.http.post_scene(active.room_id, body).await?;
        if !reply.is_success() {
            tracing::warn!(
                room_id = %active.room_id,
                status = reply.status,
                "Scene save returned non-success status"
            );
        }

        let did_update = parse_did_update(&reply.body)?;
        if did_update {
            self.cache.record(active.session, scene_version);
            tracing::info!(
                room_id = %active.room_id,
                scene_version = %scene_version,
                elements = elements.len(),
                "Scene saved"
            );
        } else {
            tracing::warn!(
                room_id = %active.room_id,
                scene_version = %scene_version,
                "Backend did not confirm scene update"
            );
        }

        Ok(did_update)
    }
}

/// Read the `didUpdate` flag from a save response.
///
/// An empty body means "not confirmed". Any other body must be JSON; the
/// flag counts when it is truthy (true, non-zero, non-empty).
fn parse_did_update(body: &[u8]) -> Result<bool, SyncError> {
    if body.is_empty() {
        return Ok(false);
    }

    let value: Value = serde_json::from_slice(body).map_err(SyncError::invalid_response)?;
    Ok(value.get("didUpdate").is_some_and(is_truthy))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
