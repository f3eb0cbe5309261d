//! Error types for port operations.

use boardsync_domain::DomainError;

/// Scene sync failures. Propagated to the caller as-is; nothing here retries.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SyncError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("Transport error during {operation}: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    /// A response arrived but its body was not what we expected.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization of the outgoing payload failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backend location is unusable (unparseable base URL).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SyncError {
    /// Create a Transport error with operation context.
    pub fn transport(operation: &'static str, message: impl ToString) -> Self {
        Self::Transport {
            operation,
            message: message.to_string(),
        }
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    pub fn configuration(message: impl ToString) -> Self {
        Self::Configuration(message.to_string())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CodecError {
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Why a single file in a batch did not make it.
///
/// Never returned from a batch call; logged and folded into the failed set.
#[derive(Debug, thiserror::Error)]
pub enum FileTransferError {
    #[error(transparent)]
    Transport(#[from] SyncError),
    #[error("Backend responded with status {0}")]
    Status(u16),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("Invalid file payload: {0}")]
    InvalidPayload(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_names_operation() {
        let err = SyncError::transport("save_scene", "connection refused");
        assert!(err.is_transport());
        assert_eq!(
            err.to_string(),
            "Transport error during save_scene: connection refused"
        );
    }

    #[test]
    fn file_errors_wrap_their_source() {
        let err: FileTransferError = CodecError::Decode("bad header".into()).into();
        assert_eq!(err.to_string(), "Decode failed: bad header");

        let err = FileTransferError::Status(404);
        assert_eq!(err.to_string(), "Backend responded with status 404");
    }
}
