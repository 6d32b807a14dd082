//! Wire payloads of the Devin REST API.

use devin_delegate_core::{
    CreatedSession, SessionHandle, SessionMessage, SessionSnapshot, SessionStatus,
};
use serde::Deserialize;

/// Body of a successful `POST /sessions` response.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateSessionResponse {
    pub session_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status_enum: Option<String>,
}

impl From<CreateSessionResponse> for CreatedSession {
    fn from(response: CreateSessionResponse) -> Self {
        Self {
            session: SessionHandle::new(response.session_id),
            url: response.url,
            status: response.status_enum.as_deref().map(SessionStatus::parse),
        }
    }
}

/// Body of a successful `GET /sessions/{id}` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionDetailsResponse {
    #[serde(default)]
    pub status_enum: Option<String>,
    #[serde(default)]
    pub messages: Vec<MessageEntry>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageEntry {
    #[serde(rename = "type", default = "default_message_kind")]
    pub kind: String,
    #[serde(rename = "message", default)]
    pub text: String,
}

fn default_message_kind() -> String {
    "message".to_string()
}

impl From<SessionDetailsResponse> for SessionSnapshot {
    fn from(details: SessionDetailsResponse) -> Self {
        let status = SessionStatus::parse(details.status_enum.as_deref().unwrap_or("unknown"));
        let message = details
            .messages
            .into_iter()
            .next_back()
            .map(|entry| SessionMessage {
                kind: entry.kind,
                text: entry.text,
            });

        Self {
            status,
            message,
            url: details.url,
        }
    }
}
