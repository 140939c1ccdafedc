// SPDX-License-Identifier: PMPL-1.0-or-later
//! Main landmark detector - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Document-level check: the page needs a `<main>` element or an element
//! with `role="main"` so assistive technology can jump to the content.

use super::{issue_id, Detector};
use crate::issue::{Issue, IssueType, Severity};
use regex::Regex;
use std::sync::LazyLock;

static MAIN_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<main(?:[\s/>]|$)").expect("valid regex"));

static MAIN_ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<[a-z][^>]*\srole\s*=\s*["']?main(?:["'\s/>]|$)"#).expect("valid regex")
});

/// Detector for a missing main landmark
pub struct MainLandmarkDetector;

impl Detector for MainLandmarkDetector {
    fn name(&self) -> &'static str {
        "main-landmark"
    }

    fn description(&self) -> &'static str {
        "Checks that the document has a main landmark (WCAG 1.3.1)"
    }

    fn detect(&self, markup: &str) -> Vec<Issue> {
        if MAIN_TAG_RE.is_match(markup) || MAIN_ROLE_RE.is_match(markup) {
            return Vec::new();
        }

        vec![Issue::new(
            issue_id(self.name(), 0),
            IssueType::Warning,
            Severity::Medium,
            "WCAG 1.3.1",
            "Document has no main landmark",
        )
        .with_element("document")
        .with_suggestion("Wrap the primary page content in a `<main>` element")
        .with_code_example("<main>\n  <h1>Page title</h1>\n  ...\n</main>")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_element_passes() {
        assert!(MainLandmarkDetector.detect("<body><main><p>Hi</p></main></body>").is_empty());
        assert!(MainLandmarkDetector.detect(r#"<MAIN id="content"></MAIN>"#).is_empty());
    }

    #[test]
    fn test_role_main_passes() {
        assert!(MainLandmarkDetector.detect(r#"<div role="main">content</div>"#).is_empty());
        assert!(MainLandmarkDetector.detect("<div class='x' role='main'></div>").is_empty());
    }

    #[test]
    fn test_missing_main() {
        let issues = MainLandmarkDetector.detect("<body><div>content</div></body>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::Warning);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].element, "document");
        assert_eq!(issues[0].id, "main-landmark-0");
    }

    #[test]
    fn test_lookalikes_do_not_count() {
        assert_eq!(MainLandmarkDetector.detect("<main-menu></main-menu>").len(), 1);
        assert_eq!(MainLandmarkDetector.detect(r#"<div role="maintenance"></div>"#).len(), 1);
        assert_eq!(MainLandmarkDetector.detect("<p>The main point</p>").len(), 1);
    }

    #[test]
    fn test_empty_markup() {
        assert_eq!(MainLandmarkDetector.detect("").len(), 1);
    }
}
