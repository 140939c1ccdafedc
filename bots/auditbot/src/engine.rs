// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit orchestration.
//!
//! Runs the detector registry over the markup, then the stylesheet when one
//! is supplied, and folds the issues into an [`AuditResult`]. Each call is
//! self-contained: nothing is cached between audits and no I/O happens.

use crate::compliance::{classify, ComplianceLevel};
use crate::config::AuditConfig;
use crate::detectors::{default_detectors, InputKind};
use crate::error::{AuditError, Result};
use crate::issue::{Issue, Severity};
use crate::score::calculate_score;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result of auditing one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// 0..=100, severity-weighted
    pub score: u32,
    /// Issues in detector order, then match order
    pub issues: Vec<Issue>,
    /// Checks not triggered, out of the configured check total
    pub passed: usize,
    /// Number of error-type issues
    pub failed: usize,
    /// Number of warning-type issues
    pub warnings: usize,
    pub compliance_level: ComplianceLevel,
}

impl AuditResult {
    /// Assemble a result from an ordered issue list
    pub fn from_issues(issues: Vec<Issue>, total_checks: usize) -> Self {
        Self {
            score: calculate_score(&issues),
            passed: total_checks.saturating_sub(issues.len()),
            failed: issues.iter().filter(|i| i.is_error()).count(),
            warnings: issues.iter().filter(|i| i.is_warning()).count(),
            compliance_level: classify(&issues),
            issues,
        }
    }

    /// Issues of one severity, in result order
    pub fn issues_by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.severity == severity).collect()
    }

    /// Whether the document falls below every conformance tier
    pub fn has_blocking_issues(&self) -> bool {
        self.compliance_level == ComplianceLevel::NonCompliant
    }
}

/// Audit markup and optional stylesheet text
pub fn analyze(config: &AuditConfig, markup: &str, stylesheet: Option<&str>) -> Result<AuditResult> {
    config.validate()?;
    check_size("markup", markup.len(), config.max_input_bytes)?;
    if let Some(css) = stylesheet {
        check_size("stylesheet", css.len(), config.max_input_bytes)?;
    }

    let mut issues = Vec::new();

    for detector in default_detectors() {
        if !config.is_enabled(detector.name()) {
            debug!(detector = detector.name(), "Detector disabled");
            continue;
        }

        let text = match detector.input() {
            InputKind::Markup => markup,
            InputKind::Stylesheet => match stylesheet {
                Some(css) => css,
                None => continue,
            },
        };

        let found = detector.detect(text);
        debug!(detector = detector.name(), issues = found.len(), "Detector finished");
        issues.extend(found);
    }

    let result = AuditResult::from_issues(issues, config.total_checks);
    info!(
        score = result.score,
        issues = result.issues.len(),
        compliance = %result.compliance_level,
        "Audit complete"
    );

    Ok(result)
}

/// Audit raw bytes, rejecting anything that is not UTF-8 text
pub fn analyze_bytes(
    config: &AuditConfig,
    markup: &[u8],
    stylesheet: Option<&[u8]>,
) -> Result<AuditResult> {
    let markup = decode("markup", markup)?;
    let stylesheet = stylesheet.map(|css| decode("stylesheet", css)).transpose()?;
    analyze(config, markup, stylesheet)
}

fn decode<'a>(what: &str, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| {
        AuditError::InvalidInput(format!("{} is not valid UTF-8: {}", what, e))
    })
}

fn check_size(what: &str, len: usize, limit: usize) -> Result<()> {
    if len > limit {
        return Err(AuditError::InvalidInput(format!(
            "{} is {} bytes, over the {} byte limit",
            what, len, limit
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueType;

    const CLEAN_PAGE: &str = r#"<html><head><title>Home</title></head>
        <body><main><h1>Welcome</h1><img src="a.png" alt="Logo"></main></body></html>"#;

    #[test]
    fn test_clean_page_is_perfect() {
        let result = analyze(&AuditConfig::default(), CLEAN_PAGE, None).expect("valid input");
        assert!(result.issues.is_empty(), "unexpected issues: {:?}", result.issues);
        assert_eq!(result.score, 100);
        assert_eq!(result.passed, 15);
        assert_eq!(result.failed, 0);
        assert_eq!(result.warnings, 0);
        assert_eq!(result.compliance_level, ComplianceLevel::AAA);
    }

    #[test]
    fn test_custom_elements_are_not_native_tags() {
        let markup = r#"<title>T</title><div role=main></div><img-slider></img-slider><input-otp id="x">
            <button-group></button-group><h1>A</h1><h3-card>B</h3-card>"#;
        let result = analyze(&AuditConfig::default(), markup, None).expect("valid input");
        assert!(result.issues.is_empty(), "unexpected issues: {:?}", result.issues);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_empty_markup() {
        let result = analyze(&AuditConfig::default(), "", None).expect("valid input");
        let ids: Vec<&str> = result.issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["main-landmark-0", "page-title-0"]);
        assert_eq!(result.score, 65);
        assert_eq!(result.passed, 13);
        assert_eq!(result.failed, 1);
        assert_eq!(result.warnings, 1);
        assert_eq!(result.compliance_level, ComplianceLevel::NonCompliant);
    }

    #[test]
    fn test_issue_order_follows_registry() {
        let markup = r#"<button></button><img src="x.png"><h1>A</h1><h3>B</h3>"#;
        let result = analyze(&AuditConfig::default(), markup, Some("p { color: #eee; background-color: #fff }"))
            .expect("valid input");
        let ids: Vec<&str> = result.issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "alt-text-0",
                "heading-order-1",
                "button-text-0",
                "main-landmark-0",
                "page-title-0",
                "color-contrast-0",
            ]
        );
    }

    #[test]
    fn test_stylesheet_only_checked_when_given() {
        let with_css = analyze(&AuditConfig::default(), CLEAN_PAGE, Some("a { color: #fff; background-color: #fff }"))
            .expect("valid input");
        assert_eq!(with_css.issues.len(), 1);
        assert_eq!(with_css.issues[0].rule, "WCAG 1.4.3");

        let empty_css = analyze(&AuditConfig::default(), CLEAN_PAGE, Some("")).expect("valid input");
        assert!(empty_css.issues.is_empty());
    }

    #[test]
    fn test_passed_saturates() {
        let markup = "<img>".repeat(20);
        let result = analyze(&AuditConfig::default(), &markup, None).expect("valid input");
        assert_eq!(result.issues.len(), 22);
        assert_eq!(result.passed, 0);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_counts_by_type() {
        let issues = vec![
            Issue::new("a-0", IssueType::Error, Severity::High, "r", "m"),
            Issue::new("b-0", IssueType::Warning, Severity::Medium, "r", "m"),
            Issue::new("c-0", IssueType::Notice, Severity::Low, "r", "m"),
        ];
        let result = AuditResult::from_issues(issues, 15);
        assert_eq!(result.failed, 1);
        assert_eq!(result.warnings, 1);
        assert_eq!(result.passed, 12);
        assert_eq!(result.score, 70);
        assert_eq!(result.issues_by_severity(Severity::Low).len(), 1);
    }

    #[test]
    fn test_disabled_detectors_skipped() {
        let config = AuditConfig {
            disabled_detectors: vec!["page-title".to_string(), "main-landmark".to_string()],
            ..AuditConfig::default()
        };
        let result = analyze(&config, "", None).expect("valid input");
        assert!(result.issues.is_empty());
        assert_eq!(result.passed, 15);
    }

    #[test]
    fn test_custom_total_checks() {
        let config = AuditConfig { total_checks: 7, ..AuditConfig::default() };
        let result = analyze(&config, "", None).expect("valid input");
        assert_eq!(result.passed, 5);
    }

    #[test]
    fn test_oversized_input_rejected() {
        let config = AuditConfig { max_input_bytes: 8, ..AuditConfig::default() };
        let err = analyze(&config, "<html><body></body></html>", None).expect_err("too large");
        assert!(matches!(err, AuditError::InvalidInput(_)), "got {:?}", err);

        let err = analyze(&config, "", Some("body { color: red }")).expect_err("css too large");
        assert!(err.to_string().contains("stylesheet"));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = analyze_bytes(&AuditConfig::default(), &[0x3c, 0xff, 0xfe], None)
            .expect_err("not UTF-8");
        assert!(matches!(err, AuditError::InvalidInput(_)));

        let err = analyze_bytes(&AuditConfig::default(), b"<p></p>", Some(&[0xc3]))
            .expect_err("not UTF-8");
        assert!(err.to_string().contains("stylesheet"));
    }

    #[test]
    fn test_bytes_match_str() {
        let from_bytes = analyze_bytes(&AuditConfig::default(), CLEAN_PAGE.as_bytes(), None)
            .expect("valid input");
        let from_str = analyze(&AuditConfig::default(), CLEAN_PAGE, None).expect("valid input");
        assert_eq!(from_bytes, from_str);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AuditConfig {
            disabled_detectors: vec!["nope".to_string()],
            ..AuditConfig::default()
        };
        let err = analyze(&config, "", None).expect_err("bad config");
        assert!(matches!(err, AuditError::Config(_)));
    }
}
