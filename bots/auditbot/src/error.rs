// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for auditbot

use thiserror::Error;

/// Main error type for the audit engine
#[derive(Error, Debug)]
pub enum AuditError {
    /// Markup or stylesheet input that cannot be scanned
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
