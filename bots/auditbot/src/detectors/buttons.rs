// SPDX-License-Identifier: PMPL-1.0-or-later
//! Button text detector - WCAG 2.4.4 Link Purpose (Level A)
//!
//! A `<button>...</button>` pair needs an accessible name: either an
//! `aria-label` or at least one letter in its text content. Nested tags
//! and character references are stripped before looking for letters, so
//! an icon-only button is flagged.

use super::{issue_id, snippet, Attributes, Detector};
use crate::issue::{Issue, IssueType, Severity};
use regex::Regex;
use std::sync::LazyLock;

static BUTTON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<button((?:[\s/][^>]*)?)>(.*?)</button\s*>").expect("valid regex")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static CHAR_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#?[a-zA-Z0-9]+;").expect("valid regex"));

/// Detector for buttons without an accessible name
pub struct ButtonTextDetector;

impl Detector for ButtonTextDetector {
    fn name(&self) -> &'static str {
        "button-text"
    }

    fn description(&self) -> &'static str {
        "Checks that buttons have text content or an aria-label (WCAG 2.4.4)"
    }

    fn detect(&self, markup: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (idx, caps) in BUTTON_RE.captures_iter(markup).enumerate() {
            if Attributes::parse(&caps[1]).has("aria-label") {
                continue;
            }
            if has_letters(&caps[2]) {
                continue;
            }

            issues.push(
                Issue::new(
                    issue_id(self.name(), idx),
                    IssueType::Error,
                    Severity::High,
                    "WCAG 2.4.4",
                    "Button has no accessible text",
                )
                .with_element(&snippet(&caps[0]))
                .with_suggestion(
                    "Add visible text inside the button, or an aria-label describing its action",
                )
                .with_code_example(
                    "<button type=\"button\" aria-label=\"Close dialog\">\n  <svg aria-hidden=\"true\">...</svg>\n</button>",
                ),
            );
        }

        issues
    }
}

/// Whether the text content of `inner` contains a letter in any script
fn has_letters(inner: &str) -> bool {
    let text = TAG_RE.replace_all(inner, "");
    let text = CHAR_REF_RE.replace_all(&text, "");
    text.chars().any(char::is_alphabetic)
}
