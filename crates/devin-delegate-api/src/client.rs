//! Devin API client.

use async_trait::async_trait;
use devin_delegate_core::{
    ApiError, CreatedSession, SessionApi, SessionHandle, SessionRequest, SessionSnapshot,
};

use crate::config::DevinConfig;
use crate::wire::{CreateSessionResponse, SessionDetailsResponse};

/// HTTP implementation of [`SessionApi`].
///
/// Thin wrapper over one `reqwest::Client`; every call authenticates with
/// the configured bearer credential. No per-call timeout is imposed here
/// and nothing is retried: both are the transport's concern.
#[derive(Debug, Clone)]
pub struct DevinClient {
    config: DevinConfig,
    http: reqwest::Client,
}

impl DevinClient {
    /// Create a client from a configuration.
    #[must_use]
    pub fn new(config: DevinConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &DevinConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Devin API rejected the request");
        Err(ApiError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

fn transport(err: &reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[async_trait]
impl SessionApi for DevinClient {
    async fn create_session(
        &self,
        request: &SessionRequest,
    ) -> Result<CreatedSession, ApiError> {
        let response = self
            .http
            .post(self.endpoint("sessions"))
            .bearer_auth(self.config.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        let response = Self::check(response).await?;

        let created: CreateSessionResponse =
            response.json().await.map_err(|e| transport(&e))?;
        tracing::info!(session = %created.session_id, "session created");

        Ok(created.into())
    }

    async fn fetch_session(
        &self,
        session: &SessionHandle,
    ) -> Result<SessionSnapshot, ApiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("sessions/{session}")))
            .bearer_auth(self.config.api_key.expose())
            .send()
            .await
            .map_err(|e| transport(&e))?;
        let response = Self::check(response).await?;

        let details: SessionDetailsResponse =
            response.json().await.map_err(|e| transport(&e))?;
        let snapshot = SessionSnapshot::from(details);
        tracing::debug!(session = %session, status = %snapshot.status, "polled session");

        Ok(snapshot)
    }
}
