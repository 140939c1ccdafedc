// SPDX-License-Identifier: PMPL-1.0-or-later
//! Auditbot CLI - runs the accessibility audit engine over local files.

use anyhow::Context;
use auditbot::{AuditConfig, ReportFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Heuristic WCAG accessibility audit for HTML and CSS
#[derive(Parser)]
#[command(name = "auditbot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a markup file, optionally with a stylesheet
    Analyze {
        /// Markup file to audit
        file: PathBuf,

        /// Stylesheet to check for colour contrast
        #[arg(long)]
        css: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "markdown")]
        format: FormatArg,

        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Print general accessibility recommendations
    Recommendations,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Markdown report
    Markdown,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => ReportFormat::Markdown,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("auditbot=debug")
    } else {
        EnvFilter::new("auditbot=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, css, format, config, output, verbose } => {
            init_logging(verbose);

            let config = match config {
                Some(path) => load_config(&path)?,
                None => AuditConfig::default(),
            };
            let markup = std::fs::read(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let stylesheet = match css {
                Some(path) => Some(
                    std::fs::read(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                ),
                None => None,
            };

            let result = auditbot::analyze_bytes(&config, &markup, stylesheet.as_deref())
                .with_context(|| format!("Failed to audit {}", file.display()))?;
            let format = ReportFormat::from(format);
            debug!(%format, issues = result.issues.len(), "Rendering report");
            let report = auditbot::render_report(&result, format)?;
            write_output(&report, output.as_deref())?;

            if result.has_blocking_issues() {
                std::process::exit(1);
            }
        }

        Commands::Recommendations => {
            for (n, tip) in auditbot::accessibility_recommendations().iter().enumerate() {
                println!("{}. {}", n + 1, tip);
            }
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<AuditConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    AuditConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)
                .with_context(|| format!("Failed to write {}", p.display()))?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
