//! Event extraction from raw authentication log lines.
//!
//! A [`LineParser`] understands one log format. [`extract_event`] is the
//! infallible single-line entry point; [`EventExtractor`] runs a parser over a
//! whole input and applies the configured [`TimestampPolicy`].

use crate::{
    error::{LogHunterError, TimestampError},
    models::Event,
};
use chrono::{NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static FAILED_PASSWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<ts>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}) .* Failed password for (?P<user>\w+) from (?P<address>[\d\.]+)",
    )
    .expect("failed-password pattern is valid")
});

/// A parser for one log format.
pub trait LineParser: Send + Sync {
    /// Parse a single line.
    ///
    /// `Ok(None)` means the line is not a failed-login entry. `Err` means the
    /// line has the right shape but its timestamp is not a real instant.
    fn parse_line(&self, line: &str) -> Result<Option<Event>, TimestampError>;

    /// Short name for diagnostics
    fn name(&self) -> &'static str;
}

/// Parser for sshd "Failed password" entries with ISO-8601 local timestamps:
///
/// ```text
/// 2024-05-01T10:00:00 host sshd[812]: Failed password for root from 10.0.0.5 port 22 ssh2
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SshdFailedPasswordParser;

impl LineParser for SshdFailedPasswordParser {
    fn parse_line(&self, line: &str) -> Result<Option<Event>, TimestampError> {
        let Some(caps) = FAILED_PASSWORD_RE.captures(line.trim()) else {
            return Ok(None);
        };

        let text = &caps["ts"];
        let timestamp = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|source| {
            TimestampError::Unparsable {
                text: text.to_string(),
                source,
            }
        })?;
        // chrono reads second 60 as a leap second
        if timestamp.nanosecond() >= 1_000_000_000 {
            return Err(TimestampError::LeapSecond {
                text: text.to_string(),
            });
        }

        Ok(Some(Event::failed_password(timestamp, &caps["user"], &caps["address"])))
    }

    fn name(&self) -> &'static str {
        "sshd_failed_password"
    }
}

/// Turn one raw line into a failed-login event, if it is one.
///
/// Never fails: lines that do not match, including ones whose timestamp is
/// not a valid calendar instant, yield `None`.
pub fn extract_event(line: &str) -> Option<Event> {
    SshdFailedPasswordParser.parse_line(line).ok().flatten()
}

/// What to do with a line whose timestamp matches the pattern but does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampPolicy {
    /// Stop the run with [`LogHunterError::Timestamp`]
    #[default]
    Abort,
    /// Log a warning and drop the line
    Skip,
}

/// Counters collected while extracting events from an input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub lines_read: usize,
    pub events_extracted: usize,
    pub lines_skipped: usize,
    pub invalid_timestamps: usize,
}

/// Events extracted from one input plus the counters for it
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub events: Vec<Event>,
    pub stats: ExtractionStats,
}

/// Runs a [`LineParser`] over every line of an input
pub struct EventExtractor<P = SshdFailedPasswordParser> {
    parser: P,
    policy: TimestampPolicy,
}

impl<P: LineParser> EventExtractor<P> {
    /// Create an extractor that aborts on invalid timestamps
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            policy: TimestampPolicy::Abort,
        }
    }

    /// Override the invalid-timestamp policy
    pub fn with_policy(mut self, policy: TimestampPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Extract events from every line, in input order
    pub fn extract_all<I, S>(&self, lines: I) -> Result<Extraction, LogHunterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extraction = Extraction::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_number = index + 1;
            extraction.stats.lines_read += 1;

            match self.parser.parse_line(line) {
                Ok(Some(event)) => {
                    extraction.stats.events_extracted += 1;
                    extraction.events.push(event);
                }
                Ok(None) => extraction.stats.lines_skipped += 1,
                Err(source) => match self.policy {
                    TimestampPolicy::Abort => {
                        return Err(LogHunterError::Timestamp {
                            line_number,
                            source,
                        });
                    }
                    TimestampPolicy::Skip => {
                        warn!(
                            line_number,
                            timestamp = source.text(),
                            parser = self.parser.name(),
                            "Skipping line with invalid timestamp"
                        );
                        extraction.stats.invalid_timestamps += 1;
                        extraction.stats.lines_skipped += 1;
                    }
                },
            }
        }

        debug!(parser = self.parser.name(), policy = ?self.policy, "Extraction finished");
        info!(
            lines_read = extraction.stats.lines_read,
            events_extracted = extraction.stats.events_extracted,
            lines_skipped = extraction.stats.lines_skipped,
            invalid_timestamps = extraction.stats.invalid_timestamps,
            "Extracted failed-login events"
        );

        Ok(extraction)
    }
}
