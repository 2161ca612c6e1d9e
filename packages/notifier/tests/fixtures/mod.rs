//! Test fixtures: an in-process fake Campfire server.
//!
//! Accepts `user@x.com` / `secret`, hands out the token `token-123`, and
//! knows the rooms `general` (id 1), `ops` (id 2) and `quiet` (id 3). The
//! token `revoked` is answered with 403; messages to `quiet` are accepted but
//! answered without an id.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use campfire_notifier::DiagnosticSink;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// `Basic base64("user@x.com:secret")`
const USER_AUTH: &str = "Basic dXNlckB4LmNvbTpzZWNyZXQ=";
/// `Basic base64("token-123:X")`
const TOKEN_AUTH: &str = "Basic dG9rZW4tMTIzOlg=";
/// `Basic base64("revoked:X")`
const REVOKED_AUTH: &str = "Basic cmV2b2tlZDpY";
/// Room whose speak response carries no message id
const QUIET_ROOM_ID: u64 = 3;

/// A message the fake server accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posted {
    pub room_id: u64,
    pub r#type: String,
    pub body: String,
}

#[derive(Default)]
struct FakeState {
    posted: Mutex<Vec<Posted>>,
}

pub struct FakeCampfire {
    base_url: String,
    state: Arc<FakeState>,
}

impl FakeCampfire {
    /// Start the fake server on an ephemeral port.
    pub async fn start() -> Self {
        let state = Arc::new(FakeState::default());
        let app = Router::new()
            .route("/users/me.json", get(me))
            .route("/rooms.json", get(rooms))
            .route("/room/{id}/speak.json", post(speak))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake Campfire");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Fake Campfire stopped");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn posted(&self) -> Vec<Posted> {
        self.state.posted.lock().unwrap().clone()
    }
}

fn authorized(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected)
}

async fn me(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers, USER_AUTH) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "user": {
            "id": 7,
            "name": "Notifier",
            "email_address": "user@x.com",
            "api_auth_token": "token-123"
        }
    })))
}

async fn rooms(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if authorized(&headers, REVOKED_AUTH) {
        return Err(StatusCode::FORBIDDEN);
    }
    if !authorized(&headers, TOKEN_AUTH) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "rooms": [
            {"id": 1, "name": "general", "topic": null},
            {"id": 2, "name": "ops"},
            {"id": QUIET_ROOM_ID, "name": "quiet"}
        ]
    })))
}

async fn speak(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if !authorized(&headers, TOKEN_AUTH) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if !(1..=QUIET_ROOM_ID).contains(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let r#type = body["message"]["type"].as_str().unwrap_or_default().to_string();
    let text = body["message"]["body"]
        .as_str()
        .ok_or(StatusCode::UNPROCESSABLE_ENTITY)?
        .to_string();

    let mut posted = state.posted.lock().unwrap();
    posted.push(Posted {
        room_id: id,
        r#type: r#type.clone(),
        body: text.clone(),
    });
    let message_id = posted.len() as u64;

    if id == QUIET_ROOM_ID {
        return Ok((
            StatusCode::CREATED,
            Json(json!({"message": {"room_id": id, "type": r#type, "body": text}})),
        ));
    }
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": {"id": message_id, "room_id": id, "type": r#type, "body": text}
        })),
    ))
}

/// Sink that records every reported line
#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
