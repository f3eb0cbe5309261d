//! Download files use case - fetch and decode a room's files.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use boardsync_domain::{BinaryFileData, DataUrl, FileId, RoomId, MIME_BINARY};
use futures_util::future::join_all;

use crate::infrastructure::ports::{
    ClockPort, FileCodecPort, FileTransferError, WhiteboardHttpPort,
};

/// Decoded files plus the ids that could not be loaded.
///
/// Failed ids never appear in `loaded`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub loaded: Vec<BinaryFileData>,
    pub errored: BTreeSet<FileId>,
}

pub struct DownloadFiles {
    http: Arc<dyn WhiteboardHttpPort>,
    codec: Arc<dyn FileCodecPort>,
    clock: Arc<dyn ClockPort>,
}

impl DownloadFiles {
    pub fn new(
        http: Arc<dyn WhiteboardHttpPort>,
        codec: Arc<dyn FileCodecPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self { http, codec, clock }
    }

    /// Fetch each distinct id once, concurrently, and decode it with `decryption_key`.
    ///
    /// `prefix` is a storage path whose last segment is the room id. Loaded
    /// files keep the order in which their ids first appear in `file_ids`.
    pub async fn execute(
        &self,
        prefix: &str,
        decryption_key: &str,
        file_ids: &[FileId],
    ) -> DownloadOutcome {
        let room_id = RoomId::from_prefix(prefix);
        let room_id = &room_id;

        let mut seen = HashSet::new();
        let downloads = file_ids
            .iter()
            .filter(|id| seen.insert(*id))
            .map(|id| async move {
                let result = self.download_one(room_id, id, decryption_key).await;
                (id, result)
            });

        let mut outcome = DownloadOutcome::default();
        for (id, result) in join_all(downloads).await {
            match result {
                Ok(file) => outcome.loaded.push(file),
                Err(e) => {
                    tracing::error!(
                        room_id = %room_id,
                        file_id = %id,
                        error = %e,
                        "File download failed"
                    );
                    outcome.errored.insert(id.clone());
                }
            }
        }

        tracing::debug!(
            room_id = %room_id,
            loaded = outcome.loaded.len(),
            errored = outcome.errored.len(),
            "File download batch finished"
        );
        outcome
    }

    async fn download_one(
        &self,
        room_id: &RoomId,
        file_id: &FileId,
        decryption_key: &str,
    ) -> Result<BinaryFileData, FileTransferError> {
        let reply = self.http.get_file(room_id, file_id).await?;
        if reply.is_error() {
            return Err(FileTransferError::Status(reply.status));
        }

        let decoded = self.codec.decompress(reply.body, decryption_key).await?;
        let data_url = DataUrl::from_utf8(decoded.data)?;

        let mime_type = decoded
            .metadata
            .mime_type
            .filter(|mime| !mime.is_empty())
            .unwrap_or_else(|| MIME_BINARY.to_string());
        // 0 is treated as unset, same as a missing timestamp
        let created = decoded
            .metadata
            .created
            .filter(|created| *created != 0)
            .unwrap_or_else(|| self.clock.now().timestamp_millis());

        Ok(BinaryFileData {
            mime_type,
            id: file_id.clone(),
            data_url,
            created,
        })
    }
}
