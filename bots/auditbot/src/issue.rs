// SPDX-License-Identifier: PMPL-1.0-or-later
//! Issue model shared by every detector.
//!
//! Issues are built once by a detector with the builder methods below and
//! are never mutated afterwards.

use serde::{Deserialize, Serialize};

/// How an issue is counted in the audit summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    /// Counted in `failed`
    Error,
    /// Counted in `warnings`
    Warning,
    /// Informational, not counted
    Notice,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::Error => write!(f, "error"),
            IssueType::Warning => write!(f, "warning"),
            IssueType::Notice => write!(f, "notice"),
        }
    }
}

/// Issue severity, which drives both the score penalty and the compliance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

/// One detected accessibility defect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Detector name plus ordinal of the match within that detector
    pub id: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    /// Violated guideline, e.g. "WCAG 1.1.1"
    pub rule: String,
    /// Offending markup snippet, or a symbolic token such as "document"
    pub element: String,
    pub message: String,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
}

impl Issue {
    /// Create a new issue with an empty suggestion
    pub fn new(
        id: impl Into<String>,
        issue_type: IssueType,
        severity: Severity,
        rule: &str,
        message: &str,
    ) -> Self {
        Self {
            id: id.into(),
            issue_type,
            severity,
            rule: rule.to_string(),
            element: String::new(),
            message: message.to_string(),
            suggestion: String::new(),
            code_example: None,
        }
    }

    /// Set the offending element
    pub fn with_element(mut self, element: &str) -> Self {
        self.element = element.to_string();
        self
    }

    /// Set the remediation text
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = suggestion.to_string();
        self
    }

    /// Attach a corrective snippet
    pub fn with_code_example(mut self, example: &str) -> Self {
        self.code_example = Some(example.to_string());
        self
    }

    /// Whether this issue counts towards `failed`
    pub fn is_error(&self) -> bool {
        self.issue_type == IssueType::Error
    }

    /// Whether this issue counts towards `warnings`
    pub fn is_warning(&self) -> bool {
        self.issue_type == IssueType::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let issue = Issue::new("img-alt-0", IssueType::Error, Severity::High, "WCAG 1.1.1", "Missing alt")
            .with_element("<img src=\"a.png\">")
            .with_suggestion("Add alt text")
            .with_code_example("<img src=\"a.png\" alt=\"A cat\">");

        assert_eq!(issue.id, "img-alt-0");
        assert_eq!(issue.element, "<img src=\"a.png\">");
        assert!(issue.is_error());
        assert!(!issue.is_warning());
        assert!(issue.code_example.is_some());
    }

    #[test]
    fn test_serialized_field_names() {
        let issue = Issue::new("page-title-0", IssueType::Error, Severity::Critical, "WCAG 2.4.2", "No title")
            .with_element("document")
            .with_code_example("<title>Home</title>");
        let json = serde_json::to_value(&issue).expect("serializable");

        assert_eq!(json["type"], "error");
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["codeExample"], "<title>Home</title>");
        assert!(json.get("issue_type").is_none());
    }

    #[test]
    fn test_code_example_omitted_when_absent() {
        let issue = Issue::new("x-0", IssueType::Notice, Severity::Low, "WCAG 4.1.2", "Note");
        let json = serde_json::to_value(&issue).expect("serializable");
        assert!(json.get("codeExample").is_none());
    }

    #[test]
    fn test_severity_display() {
        let names: Vec<String> = Severity::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["critical", "high", "medium", "low"]);
    }
}
