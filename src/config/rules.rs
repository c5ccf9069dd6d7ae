//! Detection rule configuration.

use crate::error::{ConfigError, LogHunterError};
use chrono::Duration;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::info;

/// Default minimum event count when the rule document omits `threshold`
pub const DEFAULT_THRESHOLD: i64 = 5;

/// Default window length when the rule document omits `window_minutes`
pub const DEFAULT_WINDOW_MINUTES: i64 = 10;

/// Parameters of the brute-force rule.
///
/// Values are validated by [`RuleConfig::new`], by the loaders and again when
/// detection starts, so a hand-built config with out-of-range fields is
/// rejected rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    pub threshold: i64,
    pub window_minutes: i64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            window_minutes: DEFAULT_WINDOW_MINUTES,
        }
    }
}

/// Rule document as written on disk. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct RuleDocument {
    threshold: Option<i64>,
    window_minutes: Option<i64>,
}

impl RuleConfig {
    /// Build a validated configuration
    pub fn new(threshold: i64, window_minutes: i64) -> Result<Self, ConfigError> {
        let config = Self {
            threshold,
            window_minutes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject a non-positive threshold, a negative window, or a window too
    /// long to represent as a duration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold < 1 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        self.window().map(|_| ())
    }

    /// Window length as a duration
    pub fn window(&self) -> Result<Duration, ConfigError> {
        if self.window_minutes < 0 {
            return Err(ConfigError::InvalidWindow(self.window_minutes));
        }
        Duration::try_minutes(self.window_minutes)
            .ok_or(ConfigError::InvalidWindow(self.window_minutes))
    }

    /// Parse a YAML rule document, applying defaults for absent keys.
    ///
    /// An empty document (or an explicit `null`) yields the defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let blank = text.lines().map(str::trim).all(|l| l.is_empty() || l.starts_with('#'));
        if blank {
            return Ok(Self::default());
        }

        let document: Option<RuleDocument> =
            serde_yaml::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        let document = document.unwrap_or_default();

        Self::new(
            document.threshold.unwrap_or(DEFAULT_THRESHOLD),
            document.window_minutes.unwrap_or(DEFAULT_WINDOW_MINUTES),
        )
    }

    /// Load and validate a YAML rule file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LogHunterError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LogHunterError::io(path, e))?;
        let config = Self::from_yaml_str(&text)?;

        info!(
            path = %path.display(),
            threshold = config.threshold,
            window_minutes = config.window_minutes,
            "Loaded rule configuration"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_absent_keys() {
        let config = RuleConfig::from_yaml_str("threshold: 3\n").unwrap();
        assert_eq!(config.threshold, 3);
        assert_eq!(config.window_minutes, DEFAULT_WINDOW_MINUTES);

        let config = RuleConfig::from_yaml_str("window_minutes: 2\n").unwrap();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.window(), Ok(Duration::minutes(2)));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(RuleConfig::from_yaml_str("").unwrap(), RuleConfig::default());
        assert_eq!(RuleConfig::from_yaml_str("# no overrides\n").unwrap(), RuleConfig::default());
        assert_eq!(RuleConfig::from_yaml_str("~\n").unwrap(), RuleConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let yaml = "threshold: 4\nwindow_minutes: 15\ndescription: ssh brute force\n";
        let config = RuleConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config, RuleConfig::new(4, 15).unwrap());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert_eq!(
            RuleConfig::from_yaml_str("threshold: 0\n"),
            Err(ConfigError::InvalidThreshold(0))
        );
        assert_eq!(
            RuleConfig::from_yaml_str("window_minutes: -1\n"),
            Err(ConfigError::InvalidWindow(-1))
        );
    }

    #[test]
    fn test_non_integer_values_rejected() {
        for yaml in ["threshold: five\n", "threshold: 2.5\n", "window_minutes: [1, 2]\n"] {
            let result = RuleConfig::from_yaml_str(yaml);
            assert!(
                matches!(result, Err(ConfigError::Malformed(_))),
                "expected malformed error for {yaml:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_zero_window_is_valid() {
        let config = RuleConfig::new(1, 0).unwrap();
        assert_eq!(config.window(), Ok(Duration::zero()));
    }

    #[test]
    fn test_window_too_long_for_duration_rejected() {
        let yaml = format!("threshold: 2\nwindow_minutes: {}\n", i64::MAX);
        assert_eq!(
            RuleConfig::from_yaml_str(&yaml),
            Err(ConfigError::InvalidWindow(i64::MAX))
        );

        let hand_built = RuleConfig {
            threshold: 2,
            window_minutes: i64::MAX,
        };
        assert_eq!(hand_built.window(), Err(ConfigError::InvalidWindow(i64::MAX)));
    }
}
