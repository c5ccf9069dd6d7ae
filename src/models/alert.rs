//! Detection results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifier of the failed-password brute-force rule
pub const BRUTEFORCE_RULE: &str = "bruteforce_failed_password";

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Medium => "medium",
        };
        write!(f, "{}", s)
    }
}

/// One brute-force detection for a (user, address) group.
///
/// `first_seen` and `last_seen` bound the minimal window in which the group
/// first reached the threshold; `count` is the number of events inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub rule: String,
    pub user: String,
    pub address: String,
    pub count: usize,
    pub window_minutes: i64,
    pub first_seen: NaiveDateTime,
    pub last_seen: NaiveDateTime,
    pub severity: Severity,
}

impl Alert {
    /// Build a brute-force alert with the fixed rule id and severity
    pub fn bruteforce(
        user: impl Into<String>,
        address: impl Into<String>,
        count: usize,
        window_minutes: i64,
        first_seen: NaiveDateTime,
        last_seen: NaiveDateTime,
    ) -> Self {
        Self {
            rule: BRUTEFORCE_RULE.to_string(),
            user: user.into(),
            address: address.into(),
            count,
            window_minutes,
            first_seen,
            last_seen,
            severity: Severity::Medium,
        }
    }

    /// Emit the alert as a structured log record
    pub fn log(&self) {
        warn!(
            target: "loghunter::alert",
            rule = %self.rule,
            user = %self.user,
            address = %self.address,
            count = self.count,
            window_minutes = self.window_minutes,
            first_seen = %self.first_seen,
            last_seen = %self.last_seen,
            severity = %self.severity,
            "Brute-force activity detected"
        );
    }
}
