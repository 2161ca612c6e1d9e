//! Chat service port.
//!
//! The use case depends on this trait; `infrastructure::campfire` provides the
//! HTTP implementation (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{PostedMessage, Room, Session},
    error::ChatServiceError,
    value_object::{Credentials, MessageBody, RoomName},
};

/// Remote chat room service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Log in and open a session.
    async fn login(&self, credentials: &Credentials) -> Result<Session, ChatServiceError>;

    /// Find a room by its exact name.
    async fn find_room_by_name(
        &self,
        session: &Session,
        room_name: &RoomName,
    ) -> Result<Room, ChatServiceError>;

    /// Post `message` into `room` as a paste.
    async fn paste(
        &self,
        session: &Session,
        room: &Room,
        message: &MessageBody,
    ) -> Result<PostedMessage, ChatServiceError>;
}
