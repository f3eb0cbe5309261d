//! External service port traits (whiteboard backend, scene model, file codec).

use async_trait::async_trait;
use boardsync_domain::{BinaryFileMetadata, FileId, RoomId, SceneElement, SceneVersion};

use super::error::{CodecError, SyncError};

// =============================================================================
// Whiteboard Backend
// =============================================================================

/// Raw HTTP response. Status interpretation is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self::new(status, Vec::new())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 4xx and 5xx responses.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// One request per call; no retries, no status checks.
///
/// Only transport-level failures are errors. Every response, whatever its
/// status, comes back as an `HttpReply`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WhiteboardHttpPort: Send + Sync {
    /// Overwrite the room's scene document with a JSON body.
    async fn post_scene(&self, room_id: &RoomId, body: Vec<u8>) -> Result<HttpReply, SyncError>;

    /// Fetch the room's scene document.
    async fn get_scene(&self, room_id: &RoomId) -> Result<HttpReply, SyncError>;

    /// Store one encoded file under the room.
    async fn post_file(
        &self,
        room_id: &RoomId,
        file_id: &FileId,
        bytes: Vec<u8>,
    ) -> Result<HttpReply, SyncError>;

    /// Fetch one encoded file's raw media.
    async fn get_file(&self, room_id: &RoomId, file_id: &FileId) -> Result<HttpReply, SyncError>;
}

// =============================================================================
// Scene Model
// =============================================================================

/// Element-level knowledge owned by the editor, not by the sync layer.
#[cfg_attr(test, mockall::automock)]
pub trait SceneModelPort: Send + Sync {
    fn scene_version(&self, elements: &[SceneElement]) -> SceneVersion;

    /// Repair or drop malformed element records loaded from storage.
    fn restore_elements(&self, raw: Vec<serde_json::Value>) -> Vec<SceneElement>;
}

// =============================================================================
// File Codec
// =============================================================================

/// Result of decompressing and decrypting a stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub data: Vec<u8>,
    pub metadata: BinaryFileMetadata,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileCodecPort: Send + Sync {
    async fn decompress(
        &self,
        encoded: Vec<u8>,
        decryption_key: &str,
    ) -> Result<DecodedFile, CodecError>;
}
