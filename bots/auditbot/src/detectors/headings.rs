// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading order detector - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Walks `<h1>`..`<h6>` start tags in document order and flags any heading
//! that descends more than one level below the previous heading. Moving
//! back up (h4 -> h2) is always allowed, and the first heading is never
//! flagged.

use super::{issue_id, snippet, Detector};
use crate::issue::{Issue, IssueType, Severity};
use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([1-6])(?:[\s/][^>]*)?>").expect("valid regex"));

/// Detector for skipped heading levels
pub struct HeadingOrderDetector;

impl Detector for HeadingOrderDetector {
    fn name(&self) -> &'static str {
        "heading-order"
    }

    fn description(&self) -> &'static str {
        "Checks that heading levels are not skipped (WCAG 1.3.1)"
    }

    fn detect(&self, markup: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        let mut previous: u8 = 0;

        for (idx, caps) in HEADING_RE.captures_iter(markup).enumerate() {
            let level = match caps[1].parse::<u8>() {
                Ok(l) => l,
                Err(_) => continue,
            };

            if previous > 0 && level > previous + 1 {
                issues.push(
                    Issue::new(
                        issue_id(self.name(), idx),
                        IssueType::Warning,
                        Severity::Medium,
                        "WCAG 1.3.1",
                        &format!(
                            "Heading level skipped: `<h{}>` follows `<h{}>`",
                            level, previous
                        ),
                    )
                    .with_element(&snippet(&caps[0]))
                    .with_suggestion(&format!(
                        "Use `<h{}>` here, or restructure so heading levels increase one step at a time",
                        previous + 1
                    ))
                    .with_code_example("<h1>Page title</h1>\n<h2>Section</h2>\n<h3>Subsection</h3>"),
                );
            }

            previous = level;
        }

        issues
    }
}
