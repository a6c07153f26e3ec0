use std::fs;
use proptest::prelude::*;
use liberchat_customizer::enums::change_action::ChangeAction;
use liberchat_customizer::enums::replace_outcome::ReplaceOutcome;
use liberchat_customizer::services::file_modifier::FileModifier;
use liberchat_customizer::structs::change_log::ChangeLog;
use liberchat_customizer::structs::substitution::Substitution;
use crate::common::backup_of;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_identical_replace_is_a_no_op(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        old in "[A-Z]{3,8}",
        new in "[0-9]{1,8}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target.txt");
        let original = format!("{prefix}{old}{suffix}");
        fs::write(&path, &original).unwrap();
        let mut log = ChangeLog::new();

        let first = FileModifier::replace_in_file(&mut log, &path, &old, &new, None);
        prop_assert!(first.is_applied());
        let after_first = fs::read_to_string(&path).unwrap();
        let records_after_first = log.len();

        let second = FileModifier::replace_in_file(&mut log, &path, &old, &new, None);
        prop_assert_eq!(second, ReplaceOutcome::TextNotFound);
        prop_assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
        prop_assert_eq!(log.len(), records_after_first);
        prop_assert_eq!(log.count(ChangeAction::BackupCreated), 1);
        prop_assert_eq!(fs::read_to_string(backup_of(&path)).unwrap(), original);
    }

    #[test]
    fn absent_text_keeps_bytes_and_skips_backup(
        content in "[a-z \n]{0,64}",
        old in "[A-Z]{1,8}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target.txt");
        fs::write(&path, &content).unwrap();
        let mut log = ChangeLog::new();

        let outcome = FileModifier::replace_in_file(&mut log, &path, &old, "replacement", None);

        prop_assert_eq!(outcome, ReplaceOutcome::TextNotFound);
        prop_assert_eq!(fs::read(&path).unwrap(), content.into_bytes());
        prop_assert!(!backup_of(&path).exists());
        prop_assert!(log.is_empty());
    }

    #[test]
    fn one_backup_per_file_regardless_of_substitution_count(
        words in prop::collection::vec("[A-Z]{4}", 1..6),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target.txt");
        let original = words.join(" ");
        fs::write(&path, &original).unwrap();
        let mut log = ChangeLog::new();

        for word in &words {
            FileModifier::replace_in_file(&mut log, &path, word, "x", None);
        }

        prop_assert_eq!(log.count(ChangeAction::BackupCreated), 1);
        prop_assert_eq!(fs::read_to_string(backup_of(&path)).unwrap(), original);
    }

    #[test]
    fn insertion_reaches_a_fixed_point(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        anchor in "[A-Z]{3,8}",
        insertion in "[0-9]{1,8}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target.txt");
        fs::write(&path, format!("{prefix}{anchor}{suffix}")).unwrap();
        let rule = Substitution::insert_after(&anchor, &insertion);
        let mut log = ChangeLog::new();

        let first = FileModifier::replace_in_file(&mut log, &path, &rule.old, &rule.new, None);
        prop_assert!(first.is_applied());
        let after_first = fs::read_to_string(&path).unwrap();

        let second = FileModifier::replace_in_file(&mut log, &path, &rule.old, &rule.new, None);
        prop_assert_eq!(second, ReplaceOutcome::AlreadyApplied);
        prop_assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
        prop_assert_eq!(log.count(ChangeAction::TextReplaced), 1);
    }
}
