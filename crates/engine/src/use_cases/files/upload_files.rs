//! Upload files use case - store a batch of encoded files under a room.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use boardsync_domain::{FileId, FileUpload, RoomId};
use futures_util::future::join_all;

use crate::infrastructure::ports::{FileTransferError, WhiteboardHttpPort};

/// Which files made it. Every distinct input id is in exactly one set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOutcome {
    pub saved: BTreeSet<FileId>,
    pub errored: BTreeSet<FileId>,
}

pub struct UploadFiles {
    http: Arc<dyn WhiteboardHttpPort>,
}

impl UploadFiles {
    pub fn new(http: Arc<dyn WhiteboardHttpPort>) -> Self {
        Self { http }
    }

    /// Upload every file concurrently and wait for all of them.
    ///
    /// `prefix` is a storage path whose last segment is the room id. A file
    /// that fails lands in `errored` without affecting the others. If the
    /// same id is given twice, only the first payload is sent.
    pub async fn execute(&self, prefix: &str, files: Vec<FileUpload>) -> UploadOutcome {
        let room_id = RoomId::from_prefix(prefix);
        let room_id = &room_id;

        let mut seen = HashSet::new();
        let uploads = files
            .into_iter()
            .filter(|file| seen.insert(file.id.clone()))
            .map(|file| async move {
                let FileUpload { id, bytes } = file;
                let result = self.upload_one(room_id, &id, bytes).await;
                (id, result)
            });

        let mut outcome = UploadOutcome::default();
        for (id, result) in join_all(uploads).await {
            match result {
                Ok(()) => {
                    outcome.saved.insert(id);
                }
                Err(e) => {
                    tracing::error!(
                        room_id = %room_id,
                        file_id = %id,
                        error = %e,
                        "File upload failed"
                    );
                    outcome.errored.insert(id);
                }
            }
        }

        tracing::debug!(
            room_id = %room_id,
            saved = outcome.saved.len(),
            errored = outcome.errored.len(),
            "File upload batch finished"
        );
        outcome
    }

    async fn upload_one(
        &self,
        room_id: &RoomId,
        file_id: &FileId,
        bytes: Vec<u8>,
    ) -> Result<(), FileTransferError> {
        let reply = self.http.post_file(room_id, file_id, bytes).await?;
        if reply.is_error() {
            return Err(FileTransferError::Status(reply.status));
        }
        Ok(())
    }
}
