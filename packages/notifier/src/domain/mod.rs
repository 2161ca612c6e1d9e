//! Domain layer for the notifier.
//!
//! This module contains the values exchanged with the chat service and the
//! port (`ChatService`) the use case depends on. It knows nothing about HTTP.

pub mod entity;
pub mod error;
pub mod service;
pub mod value_object;

pub use entity::{PostedMessage, Room, Session};
pub use error::ChatServiceError;
pub use service::ChatService;
pub use value_object::{Credentials, Domain, MessageBody, MessageId, RoomId, RoomName};
