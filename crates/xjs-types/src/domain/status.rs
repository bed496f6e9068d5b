use chrono::{DateTime, Utc};
use serde::Serialize;

/// Placeholder for optional text fields the document did not carry
pub const NOT_AVAILABLE: &str = "NA";

/// Canonical form of every status block (workload, agent, machine, model, application)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub current: String,
    pub message: String,
    /// `None` when the source schema carried no timestamp (flat legacy fields)
    pub since: Option<DateTime<Utc>>,
}

impl StatusInfo {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            message: String::new(),
            since: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_since(mut self, since: Option<DateTime<Utc>>) -> Self {
        self.since = since;
        self
    }
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self::new(NOT_AVAILABLE)
    }
}
