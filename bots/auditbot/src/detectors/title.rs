// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page title detector - WCAG 2.4.2 Page Titled (Level A)
//!
//! Document-level check: at least one `<title>` element with non-blank
//! text must exist.

use super::{issue_id, Detector};
use crate::issue::{Issue, IssueType, Severity};
use regex::Regex;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title(?:[\s/][^>]*)?>(.*?)</title\s*>").expect("valid regex")
});

/// Detector for a missing or empty page title
pub struct PageTitleDetector;

impl Detector for PageTitleDetector {
    fn name(&self) -> &'static str {
        "page-title"
    }

    fn description(&self) -> &'static str {
        "Checks that the document has a non-empty <title> (WCAG 2.4.2)"
    }

    fn detect(&self, markup: &str) -> Vec<Issue> {
        let titled = TITLE_RE
            .captures_iter(markup)
            .any(|caps| !caps[1].trim().is_empty());
        if titled {
            return Vec::new();
        }

        vec![Issue::new(
            issue_id(self.name(), 0),
            IssueType::Error,
            Severity::Critical,
            "WCAG 2.4.2",
            "Document is missing a page title",
        )
        .with_element("document")
        .with_suggestion("Add a descriptive `<title>` inside `<head>` that identifies the page")
        .with_code_example("<head>\n  <title>Contact us - Example Shop</title>\n</head>")]
    }
}
