//! Application state and composition.

use std::sync::Arc;

use boardsync_domain::{SceneVersion, SessionId};

use crate::infrastructure::{
    cache::SceneVersionCache,
    clock::SystemClock,
    config::WhiteboardConfig,
    ports::{ClockPort, FileCodecPort, SceneModelPort, SyncError, WhiteboardHttpPort},
    scene_model::DefaultSceneModel,
    whiteboard_api::ReqwestWhiteboardClient,
};
use crate::use_cases::{self, FileUseCases, SceneUseCases};

/// Main application state.
///
/// Holds the use cases and the version cache they share.
pub struct App {
    pub use_cases: UseCases,
    version_cache: Arc<SceneVersionCache>,
}

/// Container for all use cases.
pub struct UseCases {
    pub scene: SceneUseCases,
    pub files: FileUseCases,
}

impl App {
    /// Wire the reqwest backend client, default scene model and system clock.
    ///
    /// The codec is always supplied by the caller; it owns the room's
    /// compression and encryption format. Fails only on an unusable base URL.
    pub fn new(
        config: &WhiteboardConfig,
        codec: Arc<dyn FileCodecPort>,
    ) -> Result<Self, SyncError> {
        tracing::info!(base_url = config.base_url(), "Configuring whiteboard backend");
        let http = ReqwestWhiteboardClient::new(config)?;
        Ok(Self::from_ports(
            Arc::new(http),
            Arc::new(DefaultSceneModel),
            codec,
            Arc::new(SystemClock::new()),
        ))
    }

    /// Create an App from arbitrary port implementations.
    pub fn from_ports(
        http: Arc<dyn WhiteboardHttpPort>,
        scene_model: Arc<dyn SceneModelPort>,
        codec: Arc<dyn FileCodecPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let version_cache = Arc::new(SceneVersionCache::new());

        let scene = SceneUseCases::new(
            Arc::new(use_cases::scene::CheckSceneSaved::new(
                scene_model.clone(),
                version_cache.clone(),
            )),
            Arc::new(use_cases::scene::SaveScene::new(
                http.clone(),
                scene_model.clone(),
                version_cache.clone(),
            )),
            Arc::new(use_cases::scene::LoadScene::new(
                http.clone(),
                scene_model,
                version_cache.clone(),
            )),
        );

        let files = FileUseCases::new(
            Arc::new(use_cases::files::UploadFiles::new(http.clone())),
            Arc::new(use_cases::files::DownloadFiles::new(http, codec, clock)),
        );

        Self {
            use_cases: UseCases { scene, files },
            version_cache,
        }
    }

    /// Drop the cached save state for a session that has ended.
    pub fn forget_session(&self, session: &SessionId) -> Option<SceneVersion> {
        let forgotten = self.version_cache.forget(session);
        if forgotten.is_some() {
            tracing::debug!(session = %session, "Forgot scene version for session");
        }
        forgotten
    }

    pub fn tracked_sessions(&self) -> usize {
        self.version_cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        HttpReply, MockClockPort, MockFileCodecPort, MockWhiteboardHttpPort,
    };
    use boardsync_domain::{RoomContext, RoomId, RoomKey, SceneElement};
    use serde_json::json;

    fn app(http: MockWhiteboardHttpPort) -> App {
        App::from_ports(
            Arc::new(http),
            Arc::new(DefaultSceneModel),
            Arc::new(MockFileCodecPort::new()),
            Arc::new(MockClockPort::new()),
        )
    }

    fn room(session: SessionId) -> RoomContext {
        RoomContext::new(
            session,
            RoomId::new("abc").expect("room id"),
            RoomKey::new("key").expect("room key"),
        )
    }

    #[test]
    fn new_rejects_unusable_base_url() {
        let result = App::new(
            &WhiteboardConfig::new("not a url"),
            Arc::new(MockFileCodecPort::new()),
        );
        assert!(matches!(result, Err(SyncError::Configuration(_))));

        let app = App::new(
            &WhiteboardConfig::default(),
            Arc::new(MockFileCodecPort::new()),
        )
        .expect("default config is usable");
        assert_eq!(app.tracked_sessions(), 0);
    }

    #[tokio::test]
    async fn save_marks_scene_as_saved() {
        let session = SessionId::new();
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_post_scene()
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(200, br#"{"didUpdate":true}"#.to_vec())));

        let app = app(http);
        let elements = vec![SceneElement::new("e1", "rectangle", 1)];

        assert!(!app.use_cases.scene.is_saved.execute(&room(session), &elements));
        assert!(app
            .use_cases
            .scene
            .save
            .execute(&room(session), &elements)
            .await
            .expect("save"));
        assert!(app.use_cases.scene.is_saved.execute(&room(session), &elements));
    }

    #[tokio::test]
    async fn loaded_scene_is_not_written_back() {
        let session = SessionId::new();
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_get_scene().times(1).returning(|_| {
            Ok(HttpReply::new(
                200,
                serde_json::to_vec(&json!({
                    "sceneVersion": 2,
                    "data": [{"id": "e1", "type": "rectangle", "version": 2}]
                }))
                .expect("serialize"),
            ))
        });
        http.expect_post_scene().never();

        let app = app(http);
        let elements = app
            .use_cases
            .scene
            .load
            .execute(&RoomId::new("abc").expect("room id"), Some(session))
            .await
            .expect("load")
            .expect("document present");

        assert!(app
            .use_cases
            .scene
            .save
            .execute(&room(session), &elements)
            .await
            .expect("save"));
    }

    #[tokio::test]
    async fn forgotten_session_saves_again() {
        let session = SessionId::new();
        let mut http = MockWhiteboardHttpPort::new();
        http.expect_post_scene()
            .times(2)
            .returning(|_, _| Ok(HttpReply::new(200, br#"{"didUpdate":true}"#.to_vec())));

        let app = app(http);
        let elements = vec![SceneElement::new("e1", "rectangle", 1)];
        let save = app.use_cases.scene.save.clone();

        save.execute(&room(session), &elements).await.expect("first save");
        assert_eq!(app.tracked_sessions(), 1);

        assert_eq!(app.forget_session(&session), Some(SceneVersion::new(1)));
        assert_eq!(app.tracked_sessions(), 0);

        save.execute(&room(session), &elements).await.expect("second save");
    }
}
