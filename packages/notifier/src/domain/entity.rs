//! Values returned by the chat service during one notification.
//!
//! None of these outlive a single `notify` call.

use std::fmt;

use super::value_object::{MessageBody, MessageId, RoomId, RoomName};

/// Authenticated session with the chat service.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// API token of the logged-in user
    api_token: String,
}

impl Session {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// A room resolved by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: RoomName,
}

impl Room {
    pub fn new(id: RoomId, name: RoomName) -> Self {
        Self { id, name }
    }
}

/// A message the service accepted into a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    pub id: MessageId,
    pub room_id: RoomId,
    pub body: MessageBody,
}

impl PostedMessage {
    pub fn new(id: MessageId, room_id: RoomId, body: MessageBody) -> Self {
        Self { id, room_id, body }
    }
}
