//! Load scene use case - fetch and restore a room's scene document.

use std::sync::Arc;

use boardsync_domain::{RoomId, SceneElement, SessionId, StoredSceneDocument};
use serde_json::Value;

use crate::infrastructure::cache::SceneVersionCache;
use crate::infrastructure::ports::{SceneModelPort, SyncError, WhiteboardHttpPort};

const STATUS_NOT_FOUND: u16 = 404;

pub struct LoadScene {
    http: Arc<dyn WhiteboardHttpPort>,
    scene_model: Arc<dyn SceneModelPort>,
    cache: Arc<SceneVersionCache>,
}

impl LoadScene {
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

    /// Load the room's elements.
    ///
    /// `Ok(None)` means the room has no stored document, which is not the
    /// same as a stored empty scene (`Ok(Some(vec![]))`). When `session` is
    /// given, the loaded version is recorded as saved so an untouched scene
    /// is not written straight back.
    pub async fn execute(
        &self,
        room_id: &RoomId,
        session: Option<SessionId>,
    ) -> Result<Option<Vec<SceneElement>>, SyncError> {
        let reply = self.http.get_scene(room_id).await?;

        if reply.status == STATUS_NOT_FOUND {
            tracing::debug!(room_id = %room_id, "No scene stored for room");
            return Ok(None);
        }
        if reply.is_error() {
            return Err(SyncError::invalid_response(format!(
                "scene load for room {} failed with status {}",
                room_id, reply.status
            )));
        }

        let Some(document) = parse_document(&reply.body)? else {
            tracing::debug!(room_id = %room_id, "Scene document is empty");
            return Ok(None);
        };

        let elements = self.scene_model.restore_elements(document.data);

        if let Some(session) = session {
            let scene_version = self.scene_model.scene_version(&elements);
            self.cache.record(session, scene_version);
            tracing::debug!(
                room_id = %room_id,
                scene_version = %scene_version,
                "Primed scene version cache from load"
            );
        }

        tracing::info!(
            room_id = %room_id,
            elements = elements.len(),
            stored_version = ?document.scene_version,
            "Scene loaded"
        );
        Ok(Some(elements))
    }
}

/// Empty bodies and falsy JSON scalars (`null`, `false`, `0`, `""`) mean
/// "no document". Anything else must be a JSON object.
fn parse_document(body: &[u8]) -> Result<Option<StoredSceneDocument>, SyncError> {
    if body.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body).map_err(SyncError::invalid_response)?;
    if is_falsy_scalar(&value) {
        return Ok(None);
    }
    if !value.is_object() {
        return Err(SyncError::invalid_response(
            "scene document is not a JSON object",
        ));
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(SyncError::invalid_response)
}

fn is_falsy_scalar(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{HttpReply, MockWhiteboardHttpPort};
    use crate::infrastructure::scene_model::DefaultSceneModel;
    use boardsync_domain::SceneVersion;
    use mockall::predicate::*;
    use serde_json::json;

    fn room_id() -> RoomId {
        RoomId::new("abc").expect("room id")
    }

    fn use_case(http: MockWhiteboardHttpPort, cache: Arc<SceneVersionCache>) -> LoadScene {
        LoadScene::new(Arc::new(http), Arc::new(DefaultSceneModel), cache)
    }

    fn json_reply(value: Value) -> HttpReply {
        HttpReply::new(200, serde_json::to_vec(&value).expect("serialize"))
    }

    #[tokio::test]
    async fn loads_and_restores_elements() {
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene()
            .with(eq(room_id()))
            .times(1)
            .returning(|_| {
                Ok(json_reply(json!({
                    "sceneVersion": 3,
                    "data": [
                        {"id": "e1", "type": "rectangle", "version": 3},
                        {"type": "broken"}
                    ]
                })))
            });

        let load = use_case(http, Arc::new(SceneVersionCache::new()));
        let elements = load
            .execute(&room_id(), None)
            .await
            .expect("load")
            .expect("document present");

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].id(), Some("e1"));
    }

    #[tokio::test]
    async fn empty_body_is_no_data() {
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene().returning(|_| Ok(HttpReply::empty(200)));

        let load = use_case(http, Arc::new(SceneVersionCache::new()));
        assert_eq!(load.execute(&room_id(), None).await.expect("load"), None);
    }

    #[tokio::test]
    async fn null_document_is_no_data() {
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene().returning(|_| Ok(json_reply(Value::Null)));

        let load = use_case(http, Arc::new(SceneVersionCache::new()));
        assert_eq!(load.execute(&room_id(), None).await.expect("load"), None);
    }

    #[tokio::test]
    async fn falsy_scalar_bodies_are_no_data() {
        for body in [json!(false), json!(0), json!("")] {
            let mut http = MockWhiteboardHttpPort::new();
            let reply = json_reply(body.clone());
            http.expect_get_scene()
                .times(1)
                .returning(move |_| Ok(reply.clone()));

            let load = use_case(http, Arc::new(SceneVersionCache::new()));
            assert_eq!(
                load.execute(&room_id(), None).await.expect("load"),
                None,
                "body {} should mean no document",
                body
            );
        }
    }

    #[tokio::test]
    async fn array_body_is_rejected_and_cache_untouched() {
        let session = SessionId::new();
        let cache = Arc::new(SceneVersionCache::new());
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene().returning(|_| Ok(json_reply(json!([]))));

        let load = use_case(http, cache.clone());
        let err = load
            .execute(&room_id(), Some(session))
            .await
            .expect_err("array is not a document");

        assert!(matches!(err, SyncError::InvalidResponse(_)));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn truthy_scalar_body_is_rejected() {
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene().returning(|_| Ok(json_reply(json!("scene"))));

        let load = use_case(http, Arc::new(SceneVersionCache::new()));
        let err = load.execute(&room_id(), None).await.expect_err("not a document");
        assert!(matches!(err, SyncError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn missing_room_is_no_data() {
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene().returning(|_| Ok(HttpReply::empty(404)));

        let load = use_case(http, Arc::new(SceneVersionCache::new()));
        assert_eq!(load.execute(&room_id(), None).await.expect("load"), None);
    }

    #[tokio::test]
    async fn empty_scene_is_distinct_from_no_data() {
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene()
            .returning(|_| Ok(json_reply(json!({"sceneVersion": 0, "data": []}))));

        let load = use_case(http, Arc::new(SceneVersionCache::new()));
        assert_eq!(
            load.execute(&room_id(), None).await.expect("load"),
            Some(Vec::new())
        );
    }

    #[tokio::test]
    async fn session_primes_version_cache() {
        let session = SessionId::new();
        let cache = Arc::new(SceneVersionCache::new());

        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene().returning(|_| {
            Ok(json_reply(json!({
                "sceneVersion": 5,
                "data": [
                    {"id": "a", "type": "rectangle", "version": 2},
                    {"id": "b", "type": "ellipse", "version": 3}
                ]
            })))
        });

        let load = use_case(http, cache.clone());
        load.execute(&room_id(), Some(session)).await.expect("load");

        assert_eq!(cache.get(&session), Some(SceneVersion::new(5)));
    }

    #[tokio::test]
    async fn no_session_leaves_cache_empty() {
        let cache = Arc::new(SceneVersionCache::new());
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene()
            .returning(|_| Ok(json_reply(json!({"data": [{"id": "a", "type": "text"}]}))));

        let load = use_case(http, cache.clone());
        load.execute(&room_id(), None).await.expect("load");

        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene()
            .returning(|_| Ok(HttpReply::new(500, b"oops".to_vec())));

        let load = use_case(http, Arc::new(SceneVersionCache::new()));
        let err = load.execute(&room_id(), None).await.expect_err("server error");
        assert!(matches!(err, SyncError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_reported() {
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene()
            .returning(|_| Ok(HttpReply::new(200, b"{not json".to_vec())));

        let load = use_case(http, Arc::new(SceneVersionCache::new()));
        let err = load.execute(&room_id(), None).await.expect_err("bad json");
        assert!(matches!(err, SyncError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene()
            .returning(|_| Err(SyncError::transport("get_scene", "dns failure")));

        let load = use_case(http, Arc::new(SceneVersionCache::new()));
        let err = load.execute(&room_id(), None).await.expect_err("transport");
        assert!(err.is_transport());
    }
}
