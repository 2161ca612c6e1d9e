//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::ChatServiceError;

/// Why a notification could not be completed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// Credentials were rejected
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// No room with the requested name
    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    /// The room exists but the message was refused
    #[error("Message rejected (status {status})")]
    PostRejected { status: u16 },

    /// Network failure or a response that could not be understood
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<ChatServiceError> for NotifyError {
    fn from(err: ChatServiceError) -> Self {
        match err {
            ChatServiceError::AuthenticationFailed => Self::AuthenticationFailed,
            ChatServiceError::RoomNotFound(name) => Self::RoomNotFound(name),
            ChatServiceError::PostRejected { status } => Self::PostRejected { status },
            ChatServiceError::Transport(detail) => Self::Transport(detail),
            ChatServiceError::UnexpectedResponse(detail) => {
                Self::Transport(format!("unexpected response: {detail}"))
            }
        }
    }
}
