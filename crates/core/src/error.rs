//! Error types for session persistence

/// Standard result type for session operations
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Errors surfaced by credential writes and storage backends.
///
/// Reads never surface these: a failed read is reported as "no credential".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum SessionError {
    #[error("Refusing to store an empty token")]
    EmptyToken,

    #[error("Storage operation failed: {message}")]
    Storage { message: String },
}

impl SessionError {
    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
