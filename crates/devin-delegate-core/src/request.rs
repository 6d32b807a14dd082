//! Session creation request.

use serde::{Deserialize, Serialize};

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Body of a session creation call.
///
/// Only `prompt` is required. Every optional field is forwarded to the
/// provider verbatim and omitted from the body entirely when unset.
/// Immutable once submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    /// The instruction for Devin to execute.
    pub prompt: String,
    /// Custom session name. Auto-generated by the provider if not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Restore from a previous snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// Associated playbook identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playbook_id: Option<String>,
    /// Session categorization labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Resource consumption ceiling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_acu_limit: Option<u32>,
    /// Prevent duplicate sessions for the same prompt.
    #[serde(default, skip_serializing_if = "is_false")]
    pub idempotent: bool,
    /// Hide the session from listings.
    #[serde(default, skip_serializing_if = "is_false")]
    pub unlisted: bool,
    /// Knowledge bases to include. `None` uses all, an empty list uses none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_ids: Option<Vec<String>>,
    /// Secrets to include. `None` uses all, an empty list uses none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_ids: Option<Vec<String>>,
}

impl SessionRequest {
    /// Create a request with just a prompt.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Set a custom session name.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Restore from a previous snapshot.
    #[must_use]
    pub fn snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }

    /// Associate a playbook.
    #[must_use]
    pub fn playbook_id(mut self, playbook_id: impl Into<String>) -> Self {
        self.playbook_id = Some(playbook_id.into());
        self
    }

    /// Label the session.
    #[must_use]
    pub fn tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Cap resource consumption.
    #[must_use]
    pub fn max_acu_limit(mut self, limit: u32) -> Self {
        self.max_acu_limit = Some(limit);
        self
    }

    /// Prevent duplicate sessions for the same prompt.
    #[must_use]
    pub fn idempotent(mut self, idempotent: bool) -> Self {
        self.idempotent = idempotent;
        self
    }

    /// Hide the session from listings.
    #[must_use]
    pub fn unlisted(mut self, unlisted: bool) -> Self {
        self.unlisted = unlisted;
        self
    }

    /// Select knowledge bases.
    #[must_use]
    pub fn knowledge_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.knowledge_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Select secrets.
    #[must_use]
    pub fn secret_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.secret_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }
}
