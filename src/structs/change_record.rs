use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use crate::enums::change_action::ChangeAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeRecord {
    pub file: String,
    pub action: ChangeAction,
    pub details: String,
    pub timestamp: DateTime<Local>,
}

impl ChangeRecord {
    pub fn new(file: impl Into<String>, action: ChangeAction, details: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            action,
            details: details.into(),
            timestamp: Local::now(),
        }
    }

    /// ISO-8601 local time with microseconds, as written into the report.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
