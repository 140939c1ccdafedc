// SPDX-License-Identifier: PMPL-1.0-or-later
//! Engine configuration.
//!
//! Every field has a default, and an empty configuration gives the
//! standard audit. Configuration is parsed from TOML text; reading the
//! text from disk is the host's job.

use crate::detectors;
use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed number of checks the `passed` count is measured against.
///
/// This is not the number of detectors: it is a catalogue-level constant
/// and stays 15 whether or not a stylesheet is audited.
pub const DEFAULT_TOTAL_CHECKS: usize = 15;

/// Default size ceiling for markup and stylesheet text (5 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Audit engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Check total used to derive `passed`
    #[serde(default = "default_total_checks")]
    pub total_checks: usize,

    /// Inputs larger than this are rejected as invalid
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// Detector names to skip
    #[serde(default)]
    pub disabled_detectors: Vec<String>,
}

fn default_total_checks() -> usize {
    DEFAULT_TOTAL_CHECKS
}

fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            total_checks: DEFAULT_TOTAL_CHECKS,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            disabled_detectors: Vec::new(),
        }
    }
}

impl AuditConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AuditConfig = toml::from_str(text)?;
        config.validate()?;
        debug!(
            total_checks = config.total_checks,
            disabled = config.disabled_detectors.len(),
            "Loaded audit configuration"
        );
        Ok(config)
    }

    /// Reject settings the engine cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.max_input_bytes == 0 {
            return Err(AuditError::Config(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }

        let known: Vec<&str> = detectors::default_detectors()
            .iter()
            .map(|d| d.name())
            .collect();
        for name in &self.disabled_detectors {
            if !known.contains(&name.as_str()) {
                return Err(AuditError::Config(format!(
                    "unknown detector \"{}\" (known: {})",
                    name,
                    known.join(", ")
                )));
            }
        }

        Ok(())
    }

    /// Whether the named detector should run
    pub fn is_enabled(&self, detector: &str) -> bool {
        !self.disabled_detectors.iter().any(|d| d == detector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuditConfig::default();
        assert_eq!(config.total_checks, 15);
        assert_eq!(config.max_input_bytes, 5 * 1024 * 1024);
        assert!(config.disabled_detectors.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AuditConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, AuditConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            total_checks = 7
            disabled_detectors = ["color-contrast", "main-landmark"]
        "#;
        let config = AuditConfig::from_toml_str(text).expect("valid config");
        assert_eq!(config.total_checks, 7);
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
        assert!(!config.is_enabled("color-contrast"));
        assert!(!config.is_enabled("main-landmark"));
        assert!(config.is_enabled("alt-text"));
    }

    #[test]
    fn test_unknown_detector_rejected() {
        let err = AuditConfig::from_toml_str(r#"disabled_detectors = ["spelling"]"#)
            .expect_err("unknown detector should fail");
        assert!(matches!(err, AuditError::Config(_)), "got {:?}", err);
        assert!(err.to_string().contains("spelling"));
    }

    #[test]
    fn test_zero_size_limit_rejected() {
        let err = AuditConfig::from_toml_str("max_input_bytes = 0").expect_err("zero limit");
        assert!(matches!(err, AuditError::Config(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AuditConfig::from_toml_str("total_check = 3").expect_err("typo key");
        assert!(matches!(err, AuditError::Toml(_)), "got {:?}", err);
    }
}
