// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label detector - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! An `<input>` with an `id` needs either an `aria-label` or a
//! `<label for="...">` somewhere in the document naming that id.
//!
//! Inputs without an `id` are not flagged: there is nothing a label could
//! point at, and wrapping labels cannot be seen without a tree. This keeps
//! false positives down at the cost of missing unlabeled id-less inputs.

use super::{issue_id, snippet, Attributes, Detector};
use crate::issue::{Issue, IssueType, Severity};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static INPUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<input((?:[\s/][^>]*)?)>").expect("valid regex"));

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<label((?:[\s/][^>]*)?)>").expect("valid regex"));

/// Detector for inputs with no programmatic label
pub struct FormLabelDetector;

impl Detector for FormLabelDetector {
    fn name(&self) -> &'static str {
        "form-label"
    }

    fn description(&self) -> &'static str {
        "Checks that identified inputs have a matching label or aria-label (WCAG 1.3.1)"
    }

    fn detect(&self, markup: &str) -> Vec<Issue> {
        let label_targets: HashSet<String> = LABEL_RE
            .captures_iter(markup)
            .filter_map(|caps| {
                Attributes::parse(&caps[1])
                    .get("for")
                    .map(|v| v.trim().to_string())
            })
            .collect();

        let mut issues = Vec::new();

        for (idx, caps) in INPUT_RE.captures_iter(markup).enumerate() {
            let attrs = Attributes::parse(&caps[1]);
            if attrs.has("aria-label") {
                continue;
            }

            let id = match attrs.get("id").map(str::trim) {
                Some(id) if !id.is_empty() => id,
                _ => continue,
            };

            if label_targets.contains(id) {
                continue;
            }

            issues.push(
                Issue::new(
                    issue_id(self.name(), idx),
                    IssueType::Error,
                    Severity::High,
                    "WCAG 1.3.1",
                    &format!("Form input \"{}\" has no associated label", id),
                )
                .with_element(&snippet(&caps[0]))
                .with_suggestion(&format!(
                    "Add `<label for=\"{}\">` with visible text, or an aria-label attribute on the input",
                    id
                ))
                .with_code_example(&format!(
                    "<label for=\"{id}\">Email address</label>\n<input id=\"{id}\" type=\"email\">"
                )),
            );
        }

        issues
    }
}
