// SPDX-License-Identifier: PMPL-1.0-or-later
//! Compliance classification.
//!
//! Decision table over issue counts by severity, first match wins:
//!
//! | Condition                               | Level           |
//! |-----------------------------------------|-----------------|
//! | any critical                            | `Non-compliant` |
//! | more than 2 high                        | `Non-compliant` |
//! | at least 1 high, or more than 3 medium  | `A`             |
//! | at least 1 medium                       | `AA`            |
//! | otherwise                               | `AAA`           |

use crate::issue::{Issue, Severity};
use serde::{Deserialize, Serialize};

/// Coarse conformance tier for an audited document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceLevel {
    #[serde(rename = "Non-compliant")]
    NonCompliant,
    A,
    AA,
    AAA,
}

impl std::fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceLevel::NonCompliant => write!(f, "Non-compliant"),
            ComplianceLevel::A => write!(f, "A"),
            ComplianceLevel::AA => write!(f, "AA"),
            ComplianceLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// Issue counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }
}

impl ComplianceLevel {
    /// Apply the decision table to severity counts
    pub fn from_counts(counts: &SeverityCounts) -> Self {
        if counts.critical > 0 || counts.high > 2 {
            ComplianceLevel::NonCompliant
        } else if counts.high > 0 || counts.medium > 3 {
            ComplianceLevel::A
        } else if counts.medium > 0 {
            ComplianceLevel::AA
        } else {
            ComplianceLevel::AAA
        }
    }
}

/// Classify a full issue list
pub fn classify(issues: &[Issue]) -> ComplianceLevel {
    ComplianceLevel::from_counts(&SeverityCounts::from_issues(issues))
}
