//! Status polling loop.

use std::time::Duration;

use devin_delegate_core::{
    DelegationResult, ProgressEvent, ProgressStore, SessionApi, SessionHandle, SessionSnapshot,
};
use tokio_util::sync::CancellationToken;

use crate::error::DelegateError;

/// Poll a session until it reaches a terminal state.
///
/// Each cycle fetches a fresh snapshot, pushes a progress event when the
/// observable state changed (always before the terminality check, so the
/// final transition is reported), then either returns the shaped result
/// or sleeps one poll interval. Long-running sessions poll indefinitely;
/// no iteration or wall-clock bound is enforced here.
///
/// Cancellation is honored at every suspension point, including during
/// the inter-poll sleep. The remote session is left running; no cleanup
/// call is made.
///
/// # Errors
/// `Transport` or `RemoteRejected` when a poll fails (the whole task
/// aborts, nothing is retried), `Cancelled` on host cancellation.
pub async fn monitor<A: SessionApi>(
    api: &A,
    session: &SessionHandle,
    progress: &ProgressStore,
    poll_interval: Duration,
    cancel: &CancellationToken,
) -> Result<DelegationResult, DelegateError> {
    let mut last_observed: Option<SessionSnapshot> = None;

    loop {
        let snapshot = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(DelegateError::Cancelled),
            fetched = api.fetch_session(session) => fetched?,
        };

        if let Some(event) = ProgressEvent::diff(last_observed.as_ref(), &snapshot) {
            tracing::debug!(session = %session, status = %snapshot.status, "session progressed");
            progress.push(event);
        }

        if snapshot.status.is_terminal() {
            tracing::info!(session = %session, status = %snapshot.status, "session reached a terminal state");
            return Ok(DelegationResult::from_snapshot(session.clone(), &snapshot));
        }

        last_observed = Some(snapshot);

        tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(DelegateError::Cancelled),
            () = tokio::time::sleep(poll_interval) => {}
        }
    }
}
