//! HTTP client for the whiteboard storage backend
//!
//! Implements the WhiteboardHttpPort trait on top of reqwest.

use async_trait::async_trait;
use boardsync_domain::{FileId, RoomId, MIME_BINARY, MIME_JSON};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};

use crate::infrastructure::config::WhiteboardConfig;
use crate::infrastructure::ports::{HttpReply, SyncError, WhiteboardHttpPort};

/// Client for the whiteboard document and file endpoints
#[derive(Clone)]
pub struct ReqwestWhiteboardClient {
    client: Client,
    base_url: Url,
}

impl ReqwestWhiteboardClient {
    /// Fails when the configured base URL does not parse or cannot take path segments.
    pub fn new(config: &WhiteboardConfig) -> Result<Self, SyncError> {
        let base_url = Url::parse(config.base_url()).map_err(|e| {
            SyncError::configuration(format!("invalid base URL {}: {}", config.base_url(), e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SyncError::configuration(format!(
                "base URL {} cannot take path segments",
                base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            Client::new()
        });

        Ok(Self { client, base_url })
    }

    fn scene_url(&self, room_id: &RoomId) -> Result<Url, SyncError> {
        self.endpoint(&[room_id.as_str()])
    }

    fn file_url(&self, room_id: &RoomId, file_id: &FileId) -> Result<Url, SyncError> {
        self.endpoint(&[room_id.as_str(), file_id.as_str()])
    }

    /// Append ids as path segments; `/`, `?` and `#` inside an id are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SyncError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SyncError::configuration("base URL cannot take path segments"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send and read the whole body, whatever the status.
    async fn send(
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<HttpReply, SyncError> {
        let response = request
            .send()
            .await
            .map_err(|e| SyncError::transport(operation, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| SyncError::transport(operation, e))?;

        tracing::trace!(operation, status, bytes = body.len(), "Whiteboard backend replied");
        Ok(HttpReply::new(status, body.to_vec()))
    }
}

#[async_trait]
impl WhiteboardHttpPort for ReqwestWhiteboardClient {
    async fn post_scene(&self, room_id: &RoomId, body: Vec<u8>) -> Result<HttpReply, SyncError> {
        let request = self
            .client
            .post(self.scene_url(room_id)?)
            .header(ACCEPT, MIME_JSON)
            .header(CONTENT_TYPE, MIME_JSON)
            .body(body);
        Self::send("post_scene", request).await
    }

    async fn get_scene(&self, room_id: &RoomId) -> Result<HttpReply, SyncError> {
        let request = self
            .client
            .get(self.scene_url(room_id)?)
            .header(ACCEPT, MIME_JSON);
        Self::send("get_scene", request).await
    }

    async fn post_file(
        &self,
        room_id: &RoomId,
        file_id: &FileId,
        bytes: Vec<u8>,
    ) -> Result<HttpReply, SyncError> {
        let request = self
            .client
            .post(self.file_url(room_id, file_id)?)
            .header(CONTENT_TYPE, MIME_BINARY)
            .body(bytes);
        Self::send("post_file", request).await
    }

    async fn get_file(&self, room_id: &RoomId, file_id: &FileId) -> Result<HttpReply, SyncError> {
        let request = self
            .client
            .get(self.file_url(room_id, file_id)?)
            .query(&[("alt", "media")]);
        Self::send("get_file", request).await
    }
}
