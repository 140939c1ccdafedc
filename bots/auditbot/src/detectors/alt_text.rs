// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text detector - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Every `<img>` must carry an `alt` attribute. An empty `alt=""` is the
//! correct marking for decorative images and is accepted.

use super::{issue_id, snippet, Attributes, Detector};
use crate::issue::{Issue, IssueType, Severity};
use regex::Regex;
use std::sync::LazyLock;

static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img((?:[\s/][^>]*)?)>").expect("valid regex"));

/// Detector for images without alternative text
pub struct AltTextDetector;

impl Detector for AltTextDetector {
    fn name(&self) -> &'static str {
        "alt-text"
    }

    fn description(&self) -> &'static str {
        "Checks <img> elements for an alt attribute (WCAG 1.1.1)"
    }

    fn detect(&self, markup: &str) -> Vec<Issue> {
        IMG_RE
            .captures_iter(markup)
            .enumerate()
            .filter(|(_, caps)| !Attributes::parse(&caps[1]).has("alt"))
            .map(|(idx, caps)| {
                Issue::new(
                    issue_id(self.name(), idx),
                    IssueType::Error,
                    Severity::High,
                    "WCAG 1.1.1",
                    "Image is missing alternative text",
                )
                .with_element(&snippet(&caps[0]))
                .with_suggestion(
                    "Add an alt attribute describing the image, or alt=\"\" if the image is purely decorative",
                )
                .with_code_example(r#"<img src="chart.png" alt="Sales grew 20% in Q3">"#)
            })
            .collect()
    }
}
