//! File batch use cases.
//!
//! Each batch fans out one request per file and joins them all. A failing
//! file is recorded and never cancels its siblings.

use std::sync::Arc;

mod download_files;
mod upload_files;

pub use download_files::{DownloadFiles, DownloadOutcome};
pub use upload_files::{UploadFiles, UploadOutcome};

/// Container for file use cases.
pub struct FileUseCases {
    pub upload: Arc<UploadFiles>,
    pub download: Arc<DownloadFiles>,
}

impl FileUseCases {
    pub fn new(upload: Arc<UploadFiles>, download: Arc<DownloadFiles>) -> Self {
        Self { upload, download }
    }
}
