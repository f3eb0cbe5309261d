//! Boardsync Engine library.
//!
//! Persists a collaborative whiteboard's scene and its binary files to a
//! remote HTTP backend.
//!
//! ## Structure
//!
//! - `use_cases/` - Scene save/load/check and file batch upload/download
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use infrastructure::config::WhiteboardConfig;
pub use infrastructure::ports::{
    CodecError, DecodedFile, FileCodecPort, HttpReply, SceneModelPort, SyncError,
    WhiteboardHttpPort,
};
pub use use_cases::{DownloadOutcome, UploadOutcome};
