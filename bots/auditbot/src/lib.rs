// SPDX-License-Identifier: PMPL-1.0-or-later
//! Auditbot - heuristic WCAG accessibility audit engine
//!
//! Inspects a document's markup and optional stylesheet text, detects a
//! fixed catalogue of accessibility defects, scores the document and
//! classifies its conformance level.
//!
//! The engine is a single-pass textual scanner, not a browser-grade
//! checker: it builds no DOM and resolves no cascade, so detection is
//! best-effort and never exhaustive. It performs no I/O and keeps no state
//! between calls, so audits may run concurrently on any thread.
//!
//! ## Detectors
//!
//! - **Alt Text** (1.1.1): images without an `alt` attribute
//! - **Heading Order** (1.3.1): skipped heading levels
//! - **Form Labels** (1.3.1): identified inputs with no label
//! - **Button Text** (2.4.4): buttons with no accessible text
//! - **Main Landmark** (1.3.1): no `<main>` or `role="main"`
//! - **Page Title** (2.4.2): no non-empty `<title>`
//! - **Contrast** (1.4.3): stylesheet text/background pair under 4.5:1
//!
//! ## Usage
//!
//! ```
//! let result = auditbot::analyze_html("<img src='a.png'>", None).unwrap();
//! assert_eq!(result.issues[0].rule, "WCAG 1.1.1");
//! println!("{}", auditbot::generate_report(&result));
//! ```

pub mod compliance;
pub mod config;
pub mod contrast;
pub mod detectors;
pub mod engine;
pub mod error;
pub mod issue;
pub mod report;
pub mod score;

pub use compliance::ComplianceLevel;
pub use config::AuditConfig;
pub use contrast::{evaluate_contrast, ContrastLevel, ContrastResult};
pub use engine::{analyze, analyze_bytes, AuditResult};
pub use error::{AuditError, Result};
pub use issue::{Issue, IssueType, Severity};
pub use report::{accessibility_recommendations, generate_report, render_report, ReportFormat};

/// Audit markup and optional stylesheet text with the default configuration
pub fn analyze_html(markup: &str, stylesheet: Option<&str>) -> Result<AuditResult> {
    analyze(&AuditConfig::default(), markup, stylesheet)
}

/// Audit with an explicit configuration
pub fn analyze_with_config(
    config: &AuditConfig,
    markup: &str,
    stylesheet: Option<&str>,
) -> Result<AuditResult> {
    analyze(config, markup, stylesheet)
}
