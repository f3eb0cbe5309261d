//! Core types for whiteboard scene persistence.
//!
//! Pure value types with no I/O: scene elements and their version
//! fingerprint, identifiers, room context and binary file records.

pub mod error;
pub mod file;
pub mod ids;
pub mod room;
pub mod scene;

pub use error::DomainError;
pub use file::{BinaryFileData, BinaryFileMetadata, DataUrl, FileUpload, MIME_BINARY, MIME_JSON};
pub use ids::{FileId, RoomId, RoomKey, SessionId};
pub use room::{ActiveRoom, RoomContext};
pub use scene::{
    restore_elements, scene_version, SceneDocument, SceneElement, SceneVersion,
    StoredSceneDocument,
};
