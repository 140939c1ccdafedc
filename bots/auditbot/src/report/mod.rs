// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report rendering for audit results.
//!
//! - Markdown: human-readable summary plus one numbered section per issue
//! - JSON: the audit result as the hosting service serializes it
//!
//! Rendering is pure; identical results always render to identical text.

use crate::engine::AuditResult;
use crate::error::Result;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// General accessibility tips, independent of any audit
const RECOMMENDATIONS: &[&str] = &[
    "Provide text alternatives for every informative image; use alt=\"\" for decorative ones",
    "Keep heading levels in order without skipping (h1, then h2, then h3)",
    "Associate every form control with a visible <label> or an aria-label",
    "Give every button and link text that describes its action",
    "Mark up the primary content with a <main> landmark",
    "Give every page a unique, descriptive <title>",
    "Keep text contrast at 4.5:1 or higher (7:1 for AAA)",
    "Make all functionality reachable and operable with the keyboard alone",
    "Keep a visible focus indicator on interactive elements",
    "Declare the page language with the lang attribute on <html>",
    "Provide captions for video and transcripts for audio",
    "Do not rely on colour alone to convey information",
];

/// Static accessibility tips for display alongside results
pub fn accessibility_recommendations() -> &'static [&'static str] {
    RECOMMENDATIONS
}

/// Render a result in the requested format
pub fn render_report(result: &AuditResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Markdown => Ok(generate_report(result)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Render a result as a Markdown report
pub fn generate_report(result: &AuditResult) -> String {
    let mut out = String::new();

    out.push_str("# Accessibility Audit Report\n\n");
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Score:** {}/100\n", result.score));
    out.push_str(&format!("- **Compliance Level:** {}\n", result.compliance_level));
    out.push_str(&format!("- **Passed Checks:** {}\n", result.passed));
    out.push_str(&format!("- **Issues Found:** {}\n", result.issues.len()));

    if result.issues.is_empty() {
        out.push_str("\nNo accessibility issues found.\n");
        return out;
    }

    out.push_str("\n## Issues\n");

    for (n, issue) in result.issues.iter().enumerate() {
        out.push_str(&format!("\n### {}. {}\n\n", n + 1, issue.message));
        out.push_str(&format!("- **Severity:** {}\n", issue.severity));
        out.push_str(&format!("- **Rule:** {}\n", issue.rule));
        out.push_str(&format!("- **Element:** {}\n", code_span(&issue.element)));
        out.push_str(&format!("- **Suggestion:** {}\n", issue.suggestion));

        if let Some(ref example) = issue.code_example {
            out.push_str("\n**Example:**\n\n```html\n");
            out.push_str(example);
            out.push_str("\n```\n");
        }
    }

    out
}

/// Inline code span whose fence outruns every backtick run in `text`
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);

    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}
