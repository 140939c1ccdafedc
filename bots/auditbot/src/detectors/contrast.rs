// SPDX-License-Identifier: PMPL-1.0-or-later
//! Stylesheet contrast detector - WCAG 1.4.3 Contrast (Minimum) (Level AA)
//!
//! Pairs the first `color:` declaration with the first `background-color:`
//! declaration in the whole stylesheet and evaluates that single pair.
//! Declarations are not matched per selector and nothing is cascaded.
//! A missing or unparseable pair produces no issue.

use super::{issue_id, Detector, InputKind};
use crate::contrast::{evaluate_contrast, AA_THRESHOLD};
use crate::issue::{Issue, IssueType, Severity};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[\s;{])color\s*:\s*([^;}\n]+)").expect("valid regex")
});

static BACKGROUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)background-color\s*:\s*([^;}\n]+)").expect("valid regex")
});

/// Detector for low text/background contrast in a stylesheet
pub struct ColorContrastDetector;

impl Detector for ColorContrastDetector {
    fn name(&self) -> &'static str {
        "color-contrast"
    }

    fn description(&self) -> &'static str {
        "Checks the stylesheet's text/background colour pair against 4.5:1 (WCAG 1.4.3)"
    }

    fn input(&self) -> InputKind {
        InputKind::Stylesheet
    }

    fn detect(&self, stylesheet: &str) -> Vec<Issue> {
        let fg = COLOR_RE.captures(stylesheet).map(|c| c[1].trim().to_string());
        let bg = BACKGROUND_RE.captures(stylesheet).map(|c| c[1].trim().to_string());

        let (fg, bg) = match (fg, bg) {
            (Some(fg), Some(bg)) => (fg, bg),
            _ => return Vec::new(),
        };

        let result = match evaluate_contrast(&fg, &bg) {
            Some(r) => r,
            None => {
                debug!(foreground = %fg, background = %bg, "Skipping unparseable colour pair");
                return Vec::new();
            }
        };

        debug!(ratio = result.ratio, level = %result.level, "Evaluated colour pair");
        if result.wcag_aa {
            return Vec::new();
        }

        vec![Issue::new(
            issue_id(self.name(), 0),
            IssueType::Error,
            Severity::High,
            "WCAG 1.4.3",
            &format!(
                "Insufficient color contrast ratio {:.2}:1 between {} and {} (minimum {}:1)",
                result.ratio, result.foreground, result.background, AA_THRESHOLD
            ),
        )
        .with_element(&format!(
            "color: {}; background-color: {}",
            result.foreground, result.background
        ))
        .with_suggestion("Darken the text or lighten the background until the ratio reaches at least 4.5:1")
        .with_code_example("color: #333333;\nbackground-color: #ffffff;")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_contrast() {
        let css = ".text { color: #000; background-color: #fff; }";
        assert!(ColorContrastDetector.detect(css).is_empty());
    }

    #[test]
    fn test_poor_contrast() {
        let css = ".light { color: #aaa; background-color: #ccc; }";
        let issues = ColorContrastDetector.detect(css);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::Error);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].rule, "WCAG 1.4.3");
        assert_eq!(issues[0].element, "color: #aaa; background-color: #ccc");
    }

    #[test]
    fn test_message_has_two_decimal_ratio() {
        let css = "p { color: #777777; background-color: #ffffff }";
        let issues = ColorContrastDetector.detect(css);
        assert_eq!(issues.len(), 1);
        assert!(
            issues[0].message.contains("4.48:1"),
            "unexpected message: {}",
            issues[0].message
        );
    }

    #[test]
    fn test_background_color_is_not_foreground() {
        // Only a background is declared, so there is no pair
        assert!(ColorContrastDetector.detect("body { background-color: #fff; }").is_empty());
        assert!(ColorContrastDetector.detect("a { border-color: #eee; background-color: #fff; }").is_empty());
    }

    #[test]
    fn test_first_declarations_across_rules() {
        let css = "h1 { color: #bbb; }\n.card { background-color: #fff; }\np { color: #000; }";
        assert_eq!(ColorContrastDetector.detect(css).len(), 1);
    }

    #[test]
    fn test_unparseable_pair_is_silent() {
        let css = "body { color: var(--fg); background-color: var(--bg); }";
        assert!(ColorContrastDetector.detect(css).is_empty());
    }

    #[test]
    fn test_empty_stylesheet() {
        assert!(ColorContrastDetector.detect("").is_empty());
    }

    #[test]
    fn test_important_is_ignored() {
        let css = "p { color: #fff !important; background-color: #fefefe; }";
        assert_eq!(ColorContrastDetector.detect(css).len(), 1);
    }
}
