//! Notifier facade.
//!
//! `notify` logs in, finds the room and pastes the message, swallowing every
//! failure into [`COULD_NOT_CONNECT`]. `try_notify` runs the same sequence
//! and returns the failure kind instead.

use std::sync::Arc;

use crate::{
    config::CampfireConfig,
    diagnostic::{COULD_NOT_CONNECT, DiagnosticSink, StdoutSink},
    domain::{ChatService, Credentials, Domain, MessageBody, PostedMessage, RoomName},
    infrastructure::CampfireClient,
    usecase::{NotifyError, NotifyUseCase},
};

/// Sends one message to one Campfire room per call.
///
/// Holds no per-call state; it can be shared and called concurrently.
pub struct Notifier {
    config: CampfireConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(CampfireConfig::default(), Arc::new(StdoutSink))
    }
}

impl Notifier {
    pub fn new(config: CampfireConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { config, sink }
    }

    /// Post `message` to `room_name` on `domain`, reporting any failure to the sink.
    pub async fn notify(
        &self,
        email: &str,
        password: &str,
        domain: &str,
        room_name: &str,
        message: &str,
    ) {
        if let Err(e) = self
            .try_notify(email, password, domain, room_name, message)
            .await
        {
            self.report_failure(&e);
        }
    }

    /// Post `message` to `room_name` on `domain`.
    ///
    /// # Errors
    ///
    /// Returns the `NotifyError` of the first step that failed.
    pub async fn try_notify(
        &self,
        email: &str,
        password: &str,
        domain: &str,
        room_name: &str,
        message: &str,
    ) -> Result<PostedMessage, NotifyError> {
        let client = CampfireClient::new(&Domain::new(domain), &self.config)?;
        tracing::debug!("Notifying room '{}' via {}", room_name, client.base_url());

        NotifyUseCase::new(Arc::new(client))
            .execute(
                &Credentials::new(email, password),
                &RoomName::new(room_name),
                &MessageBody::new(message),
            )
            .await
    }

    /// Same as [`Notifier::notify`] against an arbitrary `ChatService`.
    pub async fn notify_with(
        &self,
        service: Arc<dyn ChatService>,
        credentials: &Credentials,
        room_name: &RoomName,
        message: &MessageBody,
    ) {
        if let Err(e) = NotifyUseCase::new(service)
            .execute(credentials, room_name, message)
            .await
        {
            self.report_failure(&e);
        }
    }

    /// Log `err` and report the fixed diagnostic line.
    pub fn report_failure(&self, err: &NotifyError) {
        tracing::warn!("Unable to send Campfire message: {}", err);
        self.sink.report(COULD_NOT_CONNECT);
    }
}

/// Post `message` to `room_name` on `domain` with the default configuration.
///
/// Returns normally whether or not the message was delivered; on failure
/// [`COULD_NOT_CONNECT`] is printed to stdout.
pub async fn notify(email: &str, password: &str, domain: &str, room_name: &str, message: &str) {
    Notifier::default()
        .notify(email, password, domain, room_name, message)
        .await;
}

/// Post `message` to `room_name` on `domain` with the default configuration,
/// returning the outcome.
pub async fn try_notify(
    email: &str,
    password: &str,
    domain: &str,
    room_name: &str,
    message: &str,
) -> Result<PostedMessage, NotifyError> {
    Notifier::default()
        .try_notify(email, password, domain, room_name, message)
        .await
}
