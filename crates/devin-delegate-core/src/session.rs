//! Session identity and observed state.

use serde::{Deserialize, Serialize};

use crate::status::SessionStatus;

/// Opaque identifier for a remote session.
///
/// Issued by the provider on creation; the sole key for all subsequent
/// status reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHandle(String);

impl SessionHandle {
    /// Wrap a provider-issued session id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry from a session's message feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMessage {
    /// Message kind as reported by the provider (e.g. `devin_message`).
    pub kind: String,
    /// Message body.
    pub text: String,
}

/// Point-in-time read of remote session state.
///
/// Not persisted; each poll produces a fresh snapshot that is diffed
/// against the previous one to decide whether to emit progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Status at the time of the poll.
    pub status: SessionStatus,
    /// Latest entry in the session's message feed, if any.
    pub message: Option<SessionMessage>,
    /// Web URL of the session, when the provider reports one.
    pub url: Option<String>,
}

/// Terminal payload of a completed delegation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationResult {
    /// The session this delegation ran as.
    pub session: SessionHandle,
    /// The terminal status.
    pub status: SessionStatus,
    /// Final message body, untruncated.
    pub message: Option<String>,
    /// Web URL of the session, when reported.
    pub url: Option<String>,
}

impl DelegationResult {
    /// Shape the final result from the last observed snapshot.
    #[must_use]
    pub fn from_snapshot(session: SessionHandle, snapshot: &SessionSnapshot) -> Self {
        Self {
            session,
            status: snapshot.status.clone(),
            message: snapshot.message.as_ref().map(|m| m.text.clone()),
            url: snapshot.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_from_snapshot() {
        let snapshot = SessionSnapshot {
            status: SessionStatus::Finished,
            message: Some(SessionMessage {
                kind: "devin_message".to_string(),
                text: "All done".to_string(),
            }),
            url: Some("https://app.devin.ai/sessions/sess_123".to_string()),
        };

        let result = DelegationResult::from_snapshot(SessionHandle::new("sess_123"), &snapshot);

        assert_eq!(result.session.as_str(), "sess_123");
        assert_eq!(result.status, SessionStatus::Finished);
        assert_eq!(result.message.as_deref(), Some("All done"));
        assert_eq!(
            result.url.as_deref(),
            Some("https://app.devin.ai/sessions/sess_123")
        );
    }
}
