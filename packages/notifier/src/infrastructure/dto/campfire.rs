//! Campfire JSON API DTOs.
//!
//! Unknown fields in responses (user names, room topics, timestamps, ...) are
//! ignored.

use serde::{Deserialize, Serialize};

/// Response of `GET /users/me.json`
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub user: UserDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub api_auth_token: String,
}

/// Response of `GET /rooms.json`
#[derive(Debug, Clone, Deserialize)]
pub struct RoomsEnvelope {
    pub rooms: Vec<RoomDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomDto {
    pub id: u64,
    pub name: String,
}

/// Message type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageType {
    PasteMessage,
}

/// Request body of `POST /room/{id}/speak.json`
#[derive(Debug, Clone, Serialize)]
pub struct SpeakRequest {
    pub message: SpeakRequestDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeakRequestDto {
    pub r#type: MessageType,
    pub body: String,
}

impl SpeakRequest {
    /// Build a paste request for `body`.
    pub fn paste(body: impl Into<String>) -> Self {
        Self {
            message: SpeakRequestDto {
                r#type: MessageType::PasteMessage,
                body: body.into(),
            },
        }
    }
}

/// Response of `POST /room/{id}/speak.json`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeakResponse {
    pub message: SpokenMessageDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpokenMessageDto {
    pub id: u64,
    pub room_id: u64,
    pub body: String,
}
