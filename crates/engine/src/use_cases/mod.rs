//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area.

pub mod files;
pub mod scene;

// Re-export main types
pub use files::{DownloadOutcome, FileUseCases, UploadOutcome};
pub use scene::SceneUseCases;
