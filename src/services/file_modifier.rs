use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use crate::config::constants::{BACKUP_SUFFIX, PREVIEW_CHARS};
use crate::enums::change_action::ChangeAction;
use crate::enums::replace_outcome::ReplaceOutcome;
use crate::errors::{CustomizerError, CustomizerResult};
use crate::logger::change_logger::ChangeLogger;
use crate::structs::change_log::ChangeLog;
use crate::structs::substitution::Substitution;

pub struct FileModifier;

impl FileModifier {

    /// `<file>.backup`, next to the file itself.
    pub fn backup_path(file_path: &Path) -> PathBuf {
        let mut raw = file_path.as_os_str().to_os_string();
        raw.push(BACKUP_SUFFIX);
        PathBuf::from(raw)
    }

    /// Copies the file aside unless a backup already exists. Returns whether a copy was made.
    pub fn backup_file(log: &mut ChangeLog, file_path: &Path) -> io::Result<bool> {
        let backup_path = Self::backup_path(file_path);
        if backup_path.exists() {
            return Ok(false);
        }

        fs::copy(file_path, &backup_path)?;
        log.record(&backup_path, ChangeAction::BackupCreated, "");
        Ok(true)
    }

    /// Replaces every occurrence of `old` with `new` in `file_path`.
    ///
    /// Never fails the run: a missing file, absent text or I/O error is logged
    /// and reported through the returned outcome. The file is backed up the
    /// first time it is actually rewritten.
    pub fn replace_in_file(
        log: &mut ChangeLog,
        file_path: &Path,
        old: &str,
        new: &str,
        description: Option<&str>,
    ) -> ReplaceOutcome {
        if !file_path.exists() {
            ChangeLogger::print_file_missing(file_path);
            return ReplaceOutcome::FileMissing;
        }

        if old.is_empty() {
            let reason = "search text is empty".to_string();
            ChangeLogger::print_failure(file_path, &reason);
            return ReplaceOutcome::Failed { reason };
        }

        match Self::try_replace(log, file_path, old, new, description) {
            Ok(outcome) => outcome,
            Err(e) => {
                ChangeLogger::print_failure(file_path, &e.to_string());
                ReplaceOutcome::Failed { reason: e.to_string() }
            }
        }
    }

    /// Feeds each substitution through [`FileModifier::replace_in_file`] in order.
    pub fn apply_substitutions(
        log: &mut ChangeLog,
        file_path: &Path,
        substitutions: &[Substitution],
    ) -> Vec<ReplaceOutcome> {
        substitutions
            .iter()
            .map(|s| Self::replace_in_file(log, file_path, &s.old, &s.new, None))
            .collect()
    }

    fn try_replace(
        log: &mut ChangeLog,
        file_path: &Path,
        old: &str,
        new: &str,
        description: Option<&str>,
    ) -> io::Result<ReplaceOutcome> {
        let content = fs::read_to_string(file_path)?;

        // An insertion keeps its anchor, so it would match again on every run.
        if new.contains(old) && content.contains(new) {
            ChangeLogger::print_already_applied(file_path, &Self::preview(new));
            return Ok(ReplaceOutcome::AlreadyApplied);
        }

        let occurrences = content.matches(old).count();
        if occurrences == 0 {
            ChangeLogger::print_text_not_found(file_path, &Self::preview(old));
            return Ok(ReplaceOutcome::TextNotFound);
        }

        Self::backup_file(log, file_path)?;

        let updated = content.replace(old, new);
        fs::write(file_path, updated)?;

        let details = match description {
            Some(d) => d.to_string(),
            None => format!("'{}...' → '{}...'", Self::preview(old), Self::preview(new)),
        };
        log.record(file_path, ChangeAction::TextReplaced, &details);

        Ok(ReplaceOutcome::Replaced { occurrences })
    }

    /// First characters of `text`, cut on a char boundary.
    pub fn preview(text: &str) -> String {
        text.chars().take(PREVIEW_CHARS).collect()
    }

    /// Writes a file this tool owns, overwriting any previous version without a backup.
    pub fn create_file(log: &mut ChangeLog, file_path: &Path, content: &str, details: &str) -> CustomizerResult<()> {
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| CustomizerError::file_error(parent, "create directory", &e.to_string()))?;
            }
        }

        fs::write(file_path, content)
            .map_err(|e| CustomizerError::file_error(file_path, "write", &e.to_string()))?;
        log.record(file_path, ChangeAction::FileCreated, details);
        Ok(())
    }

    #[cfg(unix)]
    pub fn make_executable(file_path: &Path, mode: u32) -> CustomizerResult<()> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(file_path, fs::Permissions::from_mode(mode))
            .map_err(|e| CustomizerError::file_error(file_path, "chmod", &e.to_string()))
    }

    #[cfg(not(unix))]
    pub fn make_executable(_file_path: &Path, _mode: u32) -> CustomizerResult<()> {
        Ok(())
    }
}
