//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The whiteboard backend (HTTP today, anything request/response tomorrow)
//! - Scene element knowledge (versioning, restoration) owned by the editor
//! - File decompression/decryption owned by the codec
//! - Clock (for testing)

mod error;
mod external;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{DecodedFile, FileCodecPort, HttpReply, SceneModelPort, WhiteboardHttpPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockFileCodecPort, MockSceneModelPort, MockWhiteboardHttpPort};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{CodecError, FileTransferError, SyncError};
