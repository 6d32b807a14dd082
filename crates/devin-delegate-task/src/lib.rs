//! Delegation task: session creation and progress monitoring.
//!
//! Provides:
//! - `Delegator` - Submit a task to Devin and monitor it to completion
//! - `DelegationHandle` - Cancellable background delegation
//! - `DelegateError` - Failure taxonomy

pub mod delegate;
pub mod error;
pub mod monitor;

pub use delegate::{DelegationHandle, Delegator};
pub use error::DelegateError;
