//! Session status state machine.

use serde::{Deserialize, Serialize};

/// Remote session status.
///
/// The Devin API reports status as a free-form string; only three values
/// mark a session as done. Anything else, including statuses the provider
/// adds later, is treated as still in progress so the monitor keeps polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    /// Session completed its task.
    Finished,
    /// Session is waiting on something it cannot resolve itself.
    Blocked,
    /// Session ran past its lifetime and was reclaimed.
    Expired,
    /// Any non-terminal status, carrying the raw wire value.
    Working(String),
}

impl SessionStatus {
    /// Parse a wire status string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "finished" => Self::Finished,
            "blocked" => Self::Blocked,
            "expired" => Self::Expired,
            other => Self::Working(other.to_string()),
        }
    }

    /// Whether no further progress will occur.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Blocked | Self::Expired)
    }

    /// The wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Finished => "finished",
            Self::Blocked => "blocked",
            Self::Expired => "expired",
            Self::Working(raw) => raw,
        }
    }
}

impl From<String> for SessionStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(SessionStatus::parse("finished").is_terminal());
        assert!(SessionStatus::parse("blocked").is_terminal());
        assert!(SessionStatus::parse("expired").is_terminal());
    }

    #[test]
    fn test_unknown_status_is_not_terminal() {
        assert!(!SessionStatus::parse("working").is_terminal());
        assert!(!SessionStatus::parse("unknown").is_terminal());
        assert!(!SessionStatus::parse("some_future_status").is_terminal());
    }

    #[test]
    fn test_working_keeps_raw_value() {
        let status = SessionStatus::parse("resuming");
        assert_eq!(status, SessionStatus::Working("resuming".to_string()));
        assert_eq!(status.as_str(), "resuming");
    }

    #[test]
    fn test_serde_roundtrip() {
        let status: SessionStatus = serde_json::from_str("\"finished\"").unwrap();
        assert_eq!(status, SessionStatus::Finished);

        let json = serde_json::to_string(&SessionStatus::Working("working".to_string())).unwrap();
        assert_eq!(json, "\"working\"");
    }
}
