//! Sliding-window brute-force detection.
//!
//! Detection runs in two stages: [`partition`] groups failed-password
//! timestamps by (user, address), then [`scan_group`] finds the first point
//! at which a group's sorted timeline holds `threshold` events inside a
//! closed window of `window_minutes`.

use crate::{
    config::RuleConfig,
    error::ConfigError,
    models::{Alert, Event, EventKind},
};
use chrono::{Duration, NaiveDateTime};
use std::collections::HashMap;

/// Key identifying one group of events
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub user: String,
    pub address: String,
}

/// Window found by [`scan_group`]: inclusive index range into the sorted
/// timestamps plus the number of events it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breach {
    pub start: usize,
    pub end: usize,
    pub count: usize,
}

/// Group failed-password events by (user, address).
///
/// Groups come back in order of first appearance in `events`; each group
/// owns its timestamps in input order. Events of other kinds are dropped.
pub fn partition<'a, I>(events: I) -> Vec<(GroupKey, Vec<NaiveDateTime>)>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Vec<NaiveDateTime>)> = Vec::new();

    for event in events {
        if event.kind != EventKind::FailedPassword {
            continue;
        }

        let key = GroupKey {
            user: event.user.clone(),
            address: event.address.clone(),
        };
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(event.timestamp);
    }

    groups
}

/// Find the first breach in an ascending timeline.
///
/// Two-pointer scan: for each `end`, `start` advances while the span to
/// `end` is strictly longer than `window`, so events exactly `window` apart
/// share a window. Returns at the first `end` where the count reaches
/// `threshold`.
pub fn scan_group(sorted: &[NaiveDateTime], threshold: usize, window: Duration) -> Option<Breach> {
    let mut start = 0;

    for end in 0..sorted.len() {
        while sorted[end] - sorted[start] > window {
            start += 1;
        }

        let count = end - start + 1;
        if count >= threshold {
            return Some(Breach { start, end, count });
        }
    }

    None
}

/// Produce at most one alert per (user, address) group.
///
/// `events` need not be sorted. Fails if `config` has a threshold below 1 or
/// a negative window.
pub fn detect(events: &[Event], config: &RuleConfig) -> Result<Vec<Alert>, ConfigError> {
    config.validate()?;

    // validate() guarantees threshold >= 1
    let threshold = usize::try_from(config.threshold)
        .map_err(|_| ConfigError::InvalidThreshold(config.threshold))?;
    let window = config.window()?;

    let alerts = partition(events)
        .into_iter()
        .filter_map(|(key, mut timestamps)| {
            timestamps.sort();
            let breach = scan_group(&timestamps, threshold, window)?;
            Some(Alert::bruteforce(
                key.user,
                key.address,
                breach.count,
                config.window_minutes,
                timestamps[breach.start],
                timestamps[breach.end],
            ))
        })
        .collect();

    Ok(alerts)
}
