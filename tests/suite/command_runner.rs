use clap::Parser;
use liberchat_customizer::errors::CustomizerError;
use liberchat_customizer::structs::cli::Cli;
use liberchat_customizer::workers::command_runner::CommandRunner;
use crate::common::{snapshot, Workspace};

fn cli(ws: &Workspace, extra: &[&str]) -> Cli {
    let mut args = vec![
        "liberchat-customizer".to_string(),
        "--jitsi-path".to_string(),
        ws.jitsi.display().to_string(),
        "--yunohost-path".to_string(),
        ws.yunohost.display().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::parse_from(args)
}

#[test]
fn dry_run_writes_nothing() {
    let ws = Workspace::populated();
    let config = ws.config_file();
    let before = snapshot(ws.dir.path());

    let result = CommandRunner::new()
        .run_command(cli(&ws, &["--dry-run", "--config", &config.display().to_string()]))
        .unwrap();

    assert!(result.is_none());
    assert_eq!(snapshot(ws.dir.path()), before);
}

#[test]
fn full_run_through_runner_uses_config_file() {
    let ws = Workspace::populated();
    let config = ws.config_file();
    let json = ws.out("changes.json");

    let mut runner = CommandRunner::new();
    let summary = runner
        .run_command(cli(
            &ws,
            &["--config", &config.display().to_string(), "--json-log", &json.display().to_string()],
        ))
        .unwrap()
        .unwrap();

    assert!(summary.replaced > 0);
    assert!(ws.out("report.md").exists());
    assert!(ws.out("deploy_liberchat.sh").exists());
    assert!(json.exists());
    assert!(runner.completed_in().is_some());
}

#[test]
fn missing_root_aborts_before_any_write() {
    let ws = Workspace::populated();
    let config = ws.config_file();
    std::fs::remove_dir_all(&ws.yunohost).unwrap();
    let before = snapshot(ws.dir.path());

    let mut runner = CommandRunner::new();
    let err = runner
        .run_command(cli(&ws, &["--config", &config.display().to_string()]))
        .unwrap_err();
    assert!(runner.completed_in().is_none());

    assert!(matches!(
        err.downcast_ref::<CustomizerError>(),
        Some(CustomizerError::MissingRoot { .. })
    ));
    assert_eq!(snapshot(ws.dir.path()), before);
}

#[test]
fn unreadable_explicit_config_fails() {
    let ws = Workspace::populated();
    let err = CommandRunner::new()
        .run_command(cli(&ws, &["--config", &ws.out("missing.toml").display().to_string()]))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CustomizerError>(),
        Some(CustomizerError::Configuration { .. })
    ));
}
