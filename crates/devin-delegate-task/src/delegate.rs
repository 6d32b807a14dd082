//! Delegation orchestration.

use std::sync::Arc;
use std::time::Duration;

use devin_delegate_api::{DevinClient, DevinConfig};
use devin_delegate_core::{DelegationResult, ProgressStore, SessionApi, SessionRequest};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::DelegateError;
use crate::monitor::monitor;

/// Runs delegations against a session API.
///
/// One instance can serve many delegations; each invocation owns its own
/// handle and last-observed state, so no cross-task sharing is needed.
pub struct Delegator<A> {
    api: A,
    poll_interval: Duration,
}

impl Delegator<DevinClient> {
    /// Build a delegator over the real Devin API from the environment.
    ///
    /// # Errors
    /// `MissingCredential` when `DEVIN_API_KEY` is absent or malformed;
    /// no network call is attempted.
    pub fn from_env() -> Result<Self, DelegateError> {
        let config = DevinConfig::from_env()?;
        let poll_interval = config.poll_interval;
        Ok(Self::new(DevinClient::new(config), poll_interval))
    }
}

impl<A: SessionApi> Delegator<A> {
    /// Create a delegator over an API implementation.
    #[must_use]
    pub const fn new(api: A, poll_interval: Duration) -> Self {
        Self { api, poll_interval }
    }

    /// Delegate a task and monitor it until a terminal state.
    ///
    /// Progress is pushed to `progress` out-of-band; the return value is
    /// the terminal outcome only.
    ///
    /// # Errors
    /// See [`DelegateError`]. Progress already pushed stays visible in
    /// the store even when the delegation later fails.
    pub async fn delegate(
        &self,
        request: &SessionRequest,
        progress: &ProgressStore,
        cancel: &CancellationToken,
    ) -> Result<DelegationResult, DelegateError> {
        if request.prompt.trim().is_empty() {
            return Err(DelegateError::InvalidRequest(
                "prompt must not be empty".to_string(),
            ));
        }

        progress.push_note("Creating Devin session...");
        let created = self.api.create_session(request).await?;
        progress.push_note(format!("Session created: {}", created.session));

        monitor(&self.api, &created.session, progress, self.poll_interval, cancel).await
    }
}

impl<A: SessionApi + 'static> Delegator<A> {
    /// Spawn a delegation as a cancellable background task.
    ///
    /// The caller keeps its own control flow; all intermediate
    /// observations arrive through the handle's progress store.
    #[must_use]
    pub fn spawn(self: Arc<Self>, request: SessionRequest) -> DelegationHandle {
        let progress = Arc::new(ProgressStore::new());
        let cancel = CancellationToken::new();

        let task_progress = Arc::clone(&progress);
        let task_cancel = cancel.clone();
        let task = tokio::spawn(async move {
            self.delegate(&request, &task_progress, &task_cancel).await
        });

        DelegationHandle {
            progress,
            cancel,
            task,
        }
    }
}

/// Handle to a spawned delegation.
pub struct DelegationHandle {
    progress: Arc<ProgressStore>,
    cancel: CancellationToken,
    task: JoinHandle<Result<DelegationResult, DelegateError>>,
}

impl DelegationHandle {
    /// The progress store for this delegation.
    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    /// Request cooperative cancellation.
    ///
    /// The loop stops at its next suspension point; the remote session
    /// keeps running on the provider side.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the terminal outcome.
    ///
    /// # Errors
    /// The delegation's own error; `Cancelled` if the task was aborted.
    pub async fn join(self) -> Result<DelegationResult, DelegateError> {
        match self.task.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(DelegateError::Cancelled),
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}
