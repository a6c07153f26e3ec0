use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum ChangeAction {
    #[serde(rename = "backup created")]
    BackupCreated,
    #[serde(rename = "text replaced")]
    TextReplaced,
    #[serde(rename = "file created")]
    FileCreated,
}

impl ChangeAction {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeAction::BackupCreated => "backup created",
            ChangeAction::TextReplaced => "text replaced",
            ChangeAction::FileCreated => "file created",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
