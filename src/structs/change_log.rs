use std::path::Path;
use crate::enums::change_action::ChangeAction;
use crate::logger::change_logger::ChangeLogger;
use crate::structs::change_record::ChangeRecord;

/// Append-only record of everything one run did to the filesystem.
#[derive(Debug, Default, Clone)]
pub struct ChangeLog {
    records: Vec<ChangeRecord>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, file: &Path, action: ChangeAction, details: &str) {
        let record = ChangeRecord::new(file.display().to_string(), action, details);
        ChangeLogger::print_record(&record);
        self.records.push(record);
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count(&self, action: ChangeAction) -> usize {
        self.records.iter().filter(|r| r.action == action).count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}
