//! # wafreport-cli
//!
//! Command-line interface for the WAF assessment workbook generator.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wafreport_report::build_workbook;

use crate::config::{parse_date, ReportConfig};

/// waf-report - Build the Azure WAF assessment workbook
#[derive(Parser)]
#[command(name = "waf-report")]
#[command(author, version, about = "Build the Azure WAF assessment workbook", long_about = None)]
struct Cli {
    /// Project root holding .github/skills/waf-assessment/mid
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Architecture document (markdown)
    #[arg(long, value_name = "FILE")]
    architecture: Option<PathBuf>,

    /// Support case export (CSV)
    #[arg(long, value_name = "FILE")]
    cases: Option<PathBuf>,

    /// Output workbook
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Assessment date, defaults to today
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    date: Option<chrono::NaiveDate>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for ReportConfig {
    fn from(cli: Cli) -> Self {
        ReportConfig {
            root: cli.root,
            architecture: cli.architecture,
            cases: cli.cases,
            output: cli.output,
            date: cli.date,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    let inputs = ReportConfig::from(cli).resolve();
    tracing::debug!(?inputs, "Resolved report inputs");

    let report = build_workbook(&inputs).with_context(|| {
        format!(
            "Failed to build workbook {}",
            inputs.output_xlsx.display()
        )
    })?;

    for warning in report.warnings() {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
    println!("{}", inputs.output_xlsx.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["waf-report"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.architecture.is_none());
        assert!(cli.date.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "waf-report",
            "--root",
            "/repo",
            "--cases",
            "cases.csv",
            "-o",
            "out.xlsx",
            "--date",
            "2025-03-14",
            "-v",
        ])
        .unwrap();
        let inputs = ReportConfig::from(cli).resolve();

        assert_eq!(
            inputs.architecture_md,
            PathBuf::from("/repo/.github/skills/waf-assessment/mid/architecture_document.md")
        );
        assert_eq!(inputs.support_cases_csv, PathBuf::from("cases.csv"));
        assert_eq!(inputs.output_xlsx, PathBuf::from("out.xlsx"));
        assert_eq!(inputs.assessment_date.to_string(), "2025-03-14");
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(Cli::try_parse_from(["waf-report", "--date", "14/03/2025"]).is_err());
    }
}
