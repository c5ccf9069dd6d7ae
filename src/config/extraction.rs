//! Environment configuration for event extraction.

use crate::services::extractor::TimestampPolicy;
use std::env;

impl TimestampPolicy {
    /// Load the policy from `LOGHUNTER_TIMESTAMP_POLICY` (`abort` or `skip`),
    /// falling back to [`TimestampPolicy::Abort`]
    pub fn from_env() -> Self {
        match env::var("LOGHUNTER_TIMESTAMP_POLICY")
            .map(|v| v.trim().to_lowercase())
            .as_deref()
        {
            Ok("skip") => TimestampPolicy::Skip,
            _ => TimestampPolicy::Abort,
        }
    }
}
