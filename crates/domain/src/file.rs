//! Binary attachments (images and other files) referenced by a scene.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::FileId;

/// MIME type used when nothing more specific is known.
pub const MIME_BINARY: &str = "application/octet-stream";

pub const MIME_JSON: &str = "application/json";

/// A `data:` URL holding a file's content, as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUrl(String);

impl DataUrl {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Interpret decoded file bytes as the stored data-URL text.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, DomainError> {
        String::from_utf8(bytes)
            .map(Self)
            .map_err(|e| DomainError::validation(format!("data URL is not valid UTF-8: {}", e)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata stored alongside an encoded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryFileMetadata {
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub created: Option<i64>,
}

/// A file ready to hand to the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryFileData {
    pub mime_type: String,
    pub id: FileId,
    #[serde(rename = "dataURL")]
    pub data_url: DataUrl,
    /// Creation time in epoch milliseconds
    pub created: i64,
}

/// An already-encoded file waiting to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub id: FileId,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(id: FileId, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            bytes: bytes.into(),
        }
    }
}
