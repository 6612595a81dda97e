use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use wafreport_report::ReportInputs;

/// Command-line settings before defaults are applied
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub root: PathBuf,
    pub architecture: Option<PathBuf>,
    pub cases: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub date: Option<NaiveDate>,
}

impl ReportConfig {
    /// Fill every unset path from the skill directory under `root` and the
    /// date from the local clock.
    pub fn resolve(self) -> ReportInputs {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let mut inputs = ReportInputs::under_root(&self.root, date);
        if let Some(path) = self.architecture {
            inputs.architecture_md = path;
        }
        if let Some(path) = self.cases {
            inputs.support_cases_csv = path;
        }
        if let Some(path) = self.output {
            inputs.output_xlsx = path;
        }
        inputs
    }
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{s}': {e}. Expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2025-03-14").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("2025/03/14").is_err());
        assert!(parse_date("2025-02-30").is_err());
        let err = parse_date("today").unwrap_err();
        assert!(err.contains("Expected YYYY-MM-DD"));
    }

    #[test]
    fn test_resolve_defaults_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig {
            root: dir.path().to_path_buf(),
            ..ReportConfig::default()
        };
        let inputs = config.resolve();

        let skill = dir.path().join(".github/skills/waf-assessment/mid");
        assert_eq!(inputs.architecture_md, skill.join("architecture_document.md"));
        assert_eq!(inputs.support_cases_csv, skill.join("azure_support_cases.csv"));
        assert_eq!(inputs.output_xlsx, skill.join("waf_assessment_results.xlsx"));
        assert_eq!(inputs.assessment_date, Local::now().date_naive());
    }

    #[test]
    fn test_resolve_keeps_overrides() {
        let config = ReportConfig {
            root: PathBuf::from("."),
            architecture: Some(PathBuf::from("docs/arch.md")),
            output: Some(PathBuf::from("build/report.xlsx")),
            date: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..ReportConfig::default()
        };
        let inputs = config.resolve();

        assert_eq!(inputs.architecture_md, PathBuf::from("docs/arch.md"));
        assert_eq!(inputs.output_xlsx, PathBuf::from("build/report.xlsx"));
        assert!(inputs
            .support_cases_csv
            .ends_with("waf-assessment/mid/azure_support_cases.csv"));
        assert_eq!(inputs.assessment_date.to_string(), "2024-12-31");
    }
}
