// SPDX-License-Identifier: PMPL-1.0-or-later
//! Severity-weighted scoring.
//!
//! Start at 100 and subtract a fixed penalty per issue, floored at zero.
//! The sum is order-independent.

use crate::issue::{Issue, Severity};

/// Score of a document with no issues
pub const MAX_SCORE: u32 = 100;

/// Points deducted for one issue of the given severity
pub const fn penalty(severity: Severity) -> u32 {
    match severity {
        Severity::Critical => 25,
        Severity::High => 15,
        Severity::Medium => 10,
        Severity::Low => 5,
    }
}

/// Score an issue list into `0..=100`
pub fn calculate_score(issues: &[Issue]) -> u32 {
    let deduction = issues
        .iter()
        .fold(0u32, |acc, issue| acc.saturating_add(penalty(issue.severity)));
    MAX_SCORE.saturating_sub(deduction)
}
