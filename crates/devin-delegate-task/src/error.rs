//! Delegation failure taxonomy.

use devin_delegate_api::CredentialError;
use devin_delegate_core::ApiError;
use thiserror::Error;

/// Why a delegation failed.
///
/// Every variant surfaces as the failed task outcome; progress already
/// pushed to the store stays visible to the caller.
#[derive(Debug, Error)]
pub enum DelegateError {
    /// No usable credential; the delegation never started.
    #[error("Devin credential unavailable: {0}")]
    MissingCredential(#[from] CredentialError),
    /// The request was rejected before any network call.
    #[error("invalid session request: {0}")]
    InvalidRequest(String),
    /// A create or poll call failed at the network level.
    #[error("request to the Devin API failed: {0}")]
    Transport(String),
    /// The remote service returned a non-success response.
    #[error("Devin API error (status {status}): {body}")]
    RemoteRejected { status: u16, body: String },
    /// The host cancelled the delegation; no result was produced.
    #[error("delegation cancelled")]
    Cancelled,
}

impl From<ApiError> for DelegateError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(message) => Self::Transport(message),
            ApiError::Rejected { status, body } => Self::RemoteRejected { status, body },
        }
    }
}
