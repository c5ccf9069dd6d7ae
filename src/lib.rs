//! LogHunter - brute-force detection for authentication logs
//!
//! Failed-password entries are extracted from an authentication log, grouped
//! by (user, source address), and flagged when a group's count inside a
//! sliding time window reaches a configured threshold.
//!
//! ## Architecture
//!
//! - `models/` - Events and alerts
//! - `services/` - Line extraction and sliding-window detection (pure)
//! - `config/` - Rule document loading, environment settings, CLI arguments
//! - `utils/` - File reading and alert document output
//! - `error` - Error taxonomy
//!
//! ## Quick Start
//!
//! ```
//! use loghunter::{detect, extract_event, RuleConfig};
//!
//! let lines = [
//!     "2024-05-01T10:00:00 web-01 sshd[1]: Failed password for root from 10.0.0.5 port 22",
//!     "2024-05-01T10:01:00 web-01 sshd[1]: Failed password for root from 10.0.0.5 port 22",
//!     "2024-05-01T10:02:00 web-01 sshd[1]: Accepted password for alice from 10.0.0.7 port 22",
//! ];
//! let events: Vec<_> = lines.iter().filter_map(|l| extract_event(l)).collect();
//!
//! let alerts = detect(&events, &RuleConfig::new(2, 10).unwrap()).unwrap();
//! assert_eq!(alerts.len(), 1);
//! assert_eq!(alerts[0].count, 2);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use std::path::Path;

pub use config::{Cli, LogFormat, LoggingConfig, RuleConfig, init_tracing};
pub use error::{ConfigError, LogHunterError, TimestampError};
pub use models::{Alert, BRUTEFORCE_RULE, Event, EventKind, Severity};
pub use services::{
    Breach, EventExtractor, Extraction, ExtractionStats, GroupKey, LineParser,
    SshdFailedPasswordParser, TimestampPolicy, detect, extract_event, partition, scan_group,
};

/// Run extraction and detection over a log file with a rule file.
///
/// Reads both inputs, validates the rules before touching the log, and
/// returns the alerts in group first-appearance order. Writing the result is
/// left to the caller.
pub fn run_pipeline(
    logs: impl AsRef<Path>,
    rules: impl AsRef<Path>,
    policy: TimestampPolicy,
) -> Result<Vec<Alert>, LogHunterError> {
    let config = RuleConfig::load(rules)?;
    let lines = utils::read_lines(logs)?;

    let extraction = EventExtractor::new(SshdFailedPasswordParser)
        .with_policy(policy)
        .extract_all(&lines)?;
    let alerts = detect(&extraction.events, &config)?;

    for alert in &alerts {
        alert.log();
    }

    Ok(alerts)
}
