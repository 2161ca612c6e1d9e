//! Campfire HTTP client.
//!
//! Implements the domain `ChatService` trait against the Campfire JSON API:
//!
//! ```text
//! GET  /users/me.json          basic auth email:password  -> api_auth_token
//! GET  /rooms.json             basic auth token:X         -> rooms
//! POST /room/{id}/speak.json   basic auth token:X         -> posted message
//! ```

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use crate::{
    config::CampfireConfig,
    domain::{
        ChatService, ChatServiceError, Credentials, Domain, MessageBody, MessageId,
        PostedMessage, Room, RoomId, RoomName, Session,
    },
    infrastructure::dto::campfire::{RoomsEnvelope, SpeakRequest, SpeakResponse, UserEnvelope},
};

/// Campfire accepts any password alongside an API token.
const TOKEN_PASSWORD: &str = "X";

/// Campfire client bound to one domain
pub struct CampfireClient {
    http: reqwest::Client,
    base_url: String,
}

impl CampfireClient {
    /// Create a client for `domain` using `config`.
    ///
    /// # Errors
    ///
    /// Returns `ChatServiceError::Transport` if the HTTP client cannot be built
    /// (e.g. no TLS backend available).
    pub fn new(domain: &Domain, config: &CampfireConfig) -> Result<Self, ChatServiceError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ChatServiceError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url_for(domain.as_str()),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ChatService for CampfireClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ChatServiceError> {
        let response = self
            .http
            .get(self.url("/users/me.json"))
            .basic_auth(credentials.email(), Some(credentials.password()))
            .send()
            .await
            .map_err(transport_error)?;

        if is_auth_rejection(response.status()) {
            return Err(ChatServiceError::AuthenticationFailed);
        }
        let envelope: UserEnvelope = read_json(ensure_success(response)?).await?;

        Ok(Session::new(envelope.user.api_auth_token))
    }

    async fn find_room_by_name(
        &self,
        session: &Session,
        room_name: &RoomName,
    ) -> Result<Room, ChatServiceError> {
        let response = self
            .http
            .get(self.url("/rooms.json"))
            .basic_auth(session.api_token(), Some(TOKEN_PASSWORD))
            .send()
            .await
            .map_err(transport_error)?;

        if is_auth_rejection(response.status()) {
            return Err(ChatServiceError::AuthenticationFailed);
        }
        let envelope: RoomsEnvelope = read_json(ensure_success(response)?).await?;

        envelope
            .rooms
            .into_iter()
            .find(|room| room_name.matches(&room.name))
            .map(|room| Room::new(RoomId::new(room.id), RoomName::new(room.name)))
            .ok_or_else(|| ChatServiceError::RoomNotFound(room_name.to_string()))
    }

    async fn paste(
        &self,
        session: &Session,
        room: &Room,
        message: &MessageBody,
    ) -> Result<PostedMessage, ChatServiceError> {
        let response = self
            .http
            .post(self.url(&format!("/room/{}/speak.json", room.id)))
            .basic_auth(session.api_token(), Some(TOKEN_PASSWORD))
            .json(&SpeakRequest::paste(message.as_str()))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Campfire refused message for room {}: {}", room.id, status);
            return Err(ChatServiceError::PostRejected {
                status: status.as_u16(),
            });
        }
        let envelope: SpeakResponse = read_json(response).await?;
        let posted = envelope.message;

        Ok(PostedMessage::new(
            MessageId::new(posted.id),
            RoomId::new(posted.room_id),
            MessageBody::new(posted.body),
        ))
    }
}

fn is_auth_rejection(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

fn transport_error(err: reqwest::Error) -> ChatServiceError {
    ChatServiceError::Transport(err.to_string())
}

fn ensure_success(response: Response) -> Result<Response, ChatServiceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ChatServiceError::UnexpectedResponse(format!(
            "{} from {}",
            status,
            response.url().path()
        )))
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, ChatServiceError> {
    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            ChatServiceError::UnexpectedResponse(e.to_string())
        } else {
            transport_error(e)
        }
    })
}
