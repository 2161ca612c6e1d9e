//! Domain layer error definitions.

use thiserror::Error;

/// Errors reported by a `ChatService` implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatServiceError {
    /// The service rejected the credentials
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// No room with exactly this name is visible to the user
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// The service refused the message
    #[error("Message rejected by the service (status {status})")]
    PostRejected { status: u16 },

    /// Connection, DNS, TLS or any other transport level failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with something we could not interpret
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}
