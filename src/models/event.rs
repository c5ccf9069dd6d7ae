//! Structured authentication events extracted from raw log lines.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kinds of authentication events the extractor can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    FailedPassword,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::FailedPassword => "failed_password",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed failed authentication attempt.
///
/// `timestamp` is timezone-naive, exactly as written in the log. `address`
/// is kept in its textual form; it is not validated as an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: NaiveDateTime,
    pub user: String,
    pub address: String,
    pub kind: EventKind,
}

impl Event {
    /// Create a failed-password event
    pub fn failed_password(
        timestamp: NaiveDateTime,
        user: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            user: user.into(),
            address: address.into(),
            kind: EventKind::FailedPassword,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_serializes_as_tag() {
        let json = serde_json::to_string(&EventKind::FailedPassword).unwrap();
        assert_eq!(json, "\"failed_password\"");
        assert_eq!(EventKind::FailedPassword.to_string(), "failed_password");
    }
}
