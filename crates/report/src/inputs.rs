use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{ReportError, Result};

/// Where the assessment skill keeps its inputs and output, relative to the
/// project root
pub const SKILL_DIR: [&str; 4] = [".github", "skills", "waf-assessment", "mid"];
pub const ARCHITECTURE_FILE: &str = "architecture_document.md";
pub const SUPPORT_CASES_FILE: &str = "azure_support_cases.csv";
pub const OUTPUT_FILE: &str = "waf_assessment_results.xlsx";

/// Paths and date for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportInputs {
    pub architecture_md: PathBuf,
    pub support_cases_csv: PathBuf,
    pub output_xlsx: PathBuf,
    pub assessment_date: NaiveDate,
}

impl ReportInputs {
    /// Default file locations under `root`
    #[must_use]
    pub fn under_root(root: &Path, assessment_date: NaiveDate) -> Self {
        let dir = skill_dir(root);
        ReportInputs {
            architecture_md: dir.join(ARCHITECTURE_FILE),
            support_cases_csv: dir.join(SUPPORT_CASES_FILE),
            output_xlsx: dir.join(OUTPUT_FILE),
            assessment_date,
        }
    }

    /// Fail on the first input file that does not exist
    pub fn check_exists(&self) -> Result<()> {
        if !self.architecture_md.exists() {
            return Err(ReportError::MissingArchitectureDoc(
                self.architecture_md.clone(),
            ));
        }
        if !self.support_cases_csv.exists() {
            return Err(ReportError::MissingSupportCases(
                self.support_cases_csv.clone(),
            ));
        }
        Ok(())
    }
}

#[must_use]
pub fn skill_dir(root: &Path) -> PathBuf {
    SKILL_DIR.iter().fold(root.to_path_buf(), |dir, part| dir.join(part))
}
