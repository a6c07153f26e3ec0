use std::path::PathBuf;
use crate::enums::replace_outcome::ReplaceOutcome;

#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    pub replaced: usize,
    pub already_applied: usize,
    pub text_not_found: usize,
    pub files_missing: usize,
    pub failed: usize,
    pub total_records: usize,
    pub report_path: Option<PathBuf>,
    pub deploy_script_path: Option<PathBuf>,
    pub json_log_path: Option<PathBuf>,
}

impl RunSummary {
    pub fn tally(&mut self, outcome: &ReplaceOutcome) {
        match outcome {
            ReplaceOutcome::Replaced { .. } => self.replaced += 1,
            ReplaceOutcome::AlreadyApplied => self.already_applied += 1,
            ReplaceOutcome::TextNotFound => self.text_not_found += 1,
            ReplaceOutcome::FileMissing => self.files_missing += 1,
            ReplaceOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.text_not_found + self.files_missing + self.failed
    }
}
