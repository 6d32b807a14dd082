//! Trait boundary to the remote service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::request::SessionRequest;
use crate::session::{SessionHandle, SessionSnapshot};
use crate::status::SessionStatus;

/// Remote call error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The call never produced a response (timeout, connection reset).
    #[error("request to the Devin API failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("Devin API error (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// A freshly created session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedSession {
    /// Handle for all subsequent polls.
    pub session: SessionHandle,
    /// Web URL of the session, when reported.
    pub url: Option<String>,
    /// Status included in the creation response, when reported.
    ///
    /// Informational only; the monitor's first poll re-reads the status,
    /// since the session may already have progressed.
    pub status: Option<SessionStatus>,
}

/// Operations the delegation task needs from the remote service.
///
/// The production implementation is the HTTP client in
/// `devin-delegate-api`; tests substitute scripted fakes.
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Create a new session. Exactly one outbound call, never retried here.
    ///
    /// # Errors
    /// `Rejected` on a non-success response, `Transport` when the call
    /// itself fails.
    async fn create_session(
        &self,
        request: &SessionRequest,
    ) -> Result<CreatedSession, ApiError>;

    /// Read the current state of a session.
    ///
    /// # Errors
    /// `Rejected` on a non-success response, `Transport` when the call
    /// itself fails.
    async fn fetch_session(
        &self,
        session: &SessionHandle,
    ) -> Result<SessionSnapshot, ApiError>;
}
