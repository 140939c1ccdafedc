// SPDX-License-Identifier: PMPL-1.0-or-later
//! Rule detectors implementing the audit catalogue.
//!
//! Each detector scans raw markup (or stylesheet) text for one defect
//! category and returns zero or more issues. Detectors are pure
//! pattern-matching scanners: no DOM is built, and no detector sees
//! another detector's output.

pub mod alt_text;
pub mod buttons;
pub mod contrast;
pub mod forms;
pub mod headings;
pub mod landmarks;
pub mod title;

use crate::issue::Issue;
use regex::Regex;
use std::sync::LazyLock;

/// Which input text a detector scans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Markup,
    Stylesheet,
}

/// Trait implemented by all detectors
pub trait Detector: Send + Sync {
    /// Stable detector name, also the prefix of every issue id it emits
    fn name(&self) -> &'static str;

    /// Short description of what this detector checks
    fn description(&self) -> &'static str;

    /// Input this detector consumes
    fn input(&self) -> InputKind {
        InputKind::Markup
    }

    /// Scan `text` and return issues in match order
    fn detect(&self, text: &str) -> Vec<Issue>;
}

/// The fixed, ordered detector registry.
///
/// Order matters: audit results list issues detector by detector in
/// exactly this sequence.
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(alt_text::AltTextDetector),
        Box::new(headings::HeadingOrderDetector),
        Box::new(forms::FormLabelDetector),
        Box::new(buttons::ButtonTextDetector),
        Box::new(landmarks::MainLandmarkDetector),
        Box::new(title::PageTitleDetector),
        Box::new(contrast::ColorContrastDetector),
    ]
}

/// Issue id for the `index`-th match of a detector
pub(crate) fn issue_id(detector: &str, index: usize) -> String {
    format!("{}-{}", detector, index)
}

/// Longest element snippet stored on an issue
const MAX_SNIPPET_CHARS: usize = 160;

/// Collapse whitespace and cap the length of an offending fragment
pub(crate) fn snippet(fragment: &str) -> String {
    let collapsed = fragment.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_SNIPPET_CHARS {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(MAX_SNIPPET_CHARS).collect();
    cut.push_str("...");
    cut
}

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid regex")
});

/// Attributes of a single start tag, in source order.
///
/// Names are lower-cased. An attribute whose value is malformed (for
/// example an unterminated quote) is recorded without a value.
#[derive(Debug, Default)]
pub(crate) struct Attributes {
    entries: Vec<(String, Option<String>)>,
}

impl Attributes {
    /// Parse the text between the tag name and the closing `>`
    pub(crate) fn parse(body: &str) -> Self {
        let entries = ATTR_RE
            .captures_iter(body)
            .map(|caps| {
                let name = caps[1].to_ascii_lowercase();
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map(|m| m.as_str().to_string());
                (name, value)
            })
            .collect();
        Self { entries }
    }

    /// Whether the attribute is present, with or without a value
    pub(crate) fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Value of the first occurrence of the attribute, if it has one
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }
}
