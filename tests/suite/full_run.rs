use std::fs;
use liberchat_customizer::enums::change_action::ChangeAction;
use liberchat_customizer::services::customizer::Customizer;
use liberchat_customizer::services::stylesheet_generator::StylesheetGenerator;
use liberchat_customizer::structs::theme_config::ThemeConfig;
use crate::common::{self, backup_of, read, Workspace};

fn run(ws: &Workspace) -> Customizer {
    let mut customizer = Customizer::new(&ws.jitsi, &ws.yunohost, ws.config()).unwrap();
    customizer.run_all_modifications().unwrap();
    customizer
}

#[test]
fn interface_config_is_rebranded_with_backup() {
    let ws = Workspace::populated();
    run(&ws);

    let config_path = ws.jitsi.join("interface_config.js");
    let edited = read(&config_path);
    assert!(edited.contains("APP_NAME: 'LiberChat Vidéo'"));
    assert!(edited.contains("PROVIDER_NAME: 'LiberChat'"));
    assert!(edited.contains("DEFAULT_WELCOME_PAGE_LOGO_URL: 'images/liberchat-logo.png'"));
    assert!(edited.contains("JITSI_WATERMARK_LINK: 'https://liberchat.org'"));
    assert!(edited.contains("SHOW_JITSI_WATERMARK: false"));
    assert!(edited.contains("SHOW_BRAND_WATERMARK: true"));
    assert!(edited.contains("BRAND_WATERMARK_LINK: 'images/liberchat-logo.png'"));
    assert!(edited.contains("CUSTOM_CSS_URL: 'css/custom.css',"));
    assert_eq!(read(&backup_of(&config_path)), common::INTERFACE_CONFIG);
}

#[test]
fn nginx_allows_any_frame_ancestor_and_adds_headers() {
    let ws = Workspace::populated();
    run(&ws);

    let nginx = read(&ws.yunohost.join("conf/nginx.conf"));
    assert!(nginx.contains("frame-ancestors *"));
    assert!(!nginx.contains("frame-ancestors 'self'"));

    let ssi_line = "ssi_types application/x-javascript application/javascript;";
    let after_ssi = &nginx[nginx.find(ssi_line).unwrap() + ssi_line.len()..];
    let following: Vec<&str> = after_ssi.lines().skip(1).take(3).collect();
    assert_eq!(
        following,
        vec![
            "# Headers personnalisés LiberChat",
            "more_set_headers \"X-Frame-Options: ALLOWALL\";",
            "more_set_headers \"X-Powered-By: LiberChat\";",
        ]
    );
}

#[test]
fn yunohost_package_is_rebranded() {
    let ws = Workspace::populated();
    run(&ws);

    let manifest = read(&ws.yunohost.join("manifest.toml"));
    assert!(manifest.contains("id = \"liberchat-video\""));
    assert!(manifest.contains("name = \"LiberChat Vidéo\""));
    assert!(manifest.contains("demo = \"https://meet.liberchat.org/\""));

    let install = read(&ws.yunohost.join("scripts/install"));
    let anchor = install.find("_setup_sources").unwrap();
    let clone = install.find("git clone https://github.com/UNionlibertaireAnarchiste-org/jitsi-meet.git").unwrap();
    assert!(anchor < clone);

    assert_eq!(read(&ws.yunohost.join("README.md")), "# LiberChat Vidéo for YunoHost\n\nInstall liberchat-video quickly.\n");
    assert_eq!(read(&ws.jitsi.join("README.md")), "# LiberChat Vidéo\n\nLiberChat Vidéo is a WebRTC application.\n");
}

#[test]
fn jitsi_web_files_are_rebranded() {
    let ws = Workspace::populated();
    run(&ws);

    let package = read(&ws.jitsi.join("package.json"));
    assert!(package.contains("\"name\": \"liberchat-video\""));
    assert!(package.contains("\"description\": \"Application de vidéoconférence LiberChat\""));
    // Only the literal pairs are touched.
    assert!(package.contains("https://github.com/jitsi/jitsi-meet"));

    let index = read(&ws.jitsi.join("index.html"));
    assert!(index.contains("<title>LiberChat Vidéo</title>"));
    assert!(index.contains("id=\"liberchat-video\""));
}

#[test]
fn every_edited_file_gets_exactly_one_backup() {
    let ws = Workspace::populated();
    let customizer = run(&ws);

    let backups: Vec<_> = customizer
        .change_log()
        .records()
        .iter()
        .filter(|r| r.action == ChangeAction::BackupCreated)
        .map(|r| r.file.clone())
        .collect();

    let mut unique = backups.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(backups.len(), unique.len());
    assert_eq!(backups.len(), 8);

    for edited in [
        ws.jitsi.join("interface_config.js"),
        ws.jitsi.join("package.json"),
        ws.jitsi.join("index.html"),
        ws.jitsi.join("README.md"),
        ws.yunohost.join("manifest.toml"),
        ws.yunohost.join("scripts/install"),
        ws.yunohost.join("conf/nginx.conf"),
        ws.yunohost.join("README.md"),
    ] {
        assert!(backup_of(&edited).exists(), "missing backup for {}", edited.display());
    }
    assert!(!backup_of(&ws.jitsi.join("css/custom.css")).exists());
}

#[test]
fn generated_files_are_written() {
    let ws = Workspace::populated();
    let customizer = run(&ws);

    let css = read(&ws.jitsi.join("css/custom.css"));
    assert_eq!(css, StylesheetGenerator::render(&ThemeConfig::default(), "images/liberchat-logo.png"));

    let script_path = ws.out("deploy_liberchat.sh");
    let script = read(&script_path);
    assert!(script.contains(&format!("JITSI_DIR=\"{}\"", ws.jitsi.display())));
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        assert_eq!(fs::metadata(&script_path).unwrap().permissions().mode() & 0o777, 0o755);
    }

    let report = read(&ws.out("report.md"));
    let summary = customizer.summary();
    // The report record is appended after rendering.
    assert!(report.contains(&format!("- **Total modifications**: {}", summary.total_records - 1)));
    assert_eq!(summary.report_path.as_deref(), Some(ws.out("report.md").as_path()));
    assert_eq!(customizer.change_log().records().last().unwrap().action, ChangeAction::FileCreated);
}

#[test]
fn missing_files_do_not_stop_the_run() {
    let ws = Workspace::empty();
    let customizer = run(&ws);

    let summary = customizer.summary();
    assert_eq!(summary.replaced, 0);
    assert!(summary.files_missing > 0);
    // css, deploy script, report
    assert_eq!(customizer.change_log().count(ChangeAction::FileCreated), 3);
    assert!(ws.out("report.md").exists());
}

#[test]
fn drifted_text_is_skipped_silently() {
    let ws = Workspace::populated();
    common::write(&ws.jitsi.join("package.json"), "{ \"name\": \"something-else\" }");
    let customizer = run(&ws);

    assert_eq!(read(&ws.jitsi.join("package.json")), "{ \"name\": \"something-else\" }");
    assert!(!backup_of(&ws.jitsi.join("package.json")).exists());
    assert!(customizer.summary().text_not_found >= 2);
}

#[test]
fn second_run_keeps_first_backups() {
    let ws = Workspace::populated();
    run(&ws);
    let second = run(&ws);

    assert_eq!(read(&backup_of(&ws.jitsi.join("package.json"))), common::PACKAGE_JSON);
    assert_eq!(read(&backup_of(&ws.yunohost.join("manifest.toml"))), common::MANIFEST);
    assert_eq!(second.change_log().count(ChangeAction::BackupCreated), 0);
}

#[test]
fn json_change_log_mirrors_records() {
    let ws = Workspace::populated();
    let mut customizer = Customizer::new(&ws.jitsi, &ws.yunohost, ws.config()).unwrap();
    customizer.set_json_log_path(Some(ws.out("changes.json")));
    let summary = customizer.run_all_modifications().unwrap();

    let value: serde_json::Value = serde_json::from_str(&read(&ws.out("changes.json"))).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), summary.total_records);
    assert_eq!(entries[0]["action"], "file created");
    assert!(entries.iter().any(|e| e["action"] == "backup created"));
    assert!(entries.iter().any(|e| e["action"] == "text replaced"));
}

#[test]
fn second_run_inserts_each_snippet_once() {
    let ws = Workspace::populated();
    run(&ws);
    let first_pass = [
        read(&ws.jitsi.join("interface_config.js")),
        read(&ws.yunohost.join("scripts/install")),
        read(&ws.yunohost.join("conf/nginx.conf")),
    ];
    let second = run(&ws);

    let interface_config = read(&ws.jitsi.join("interface_config.js"));
    let install = read(&ws.yunohost.join("scripts/install"));
    let nginx = read(&ws.yunohost.join("conf/nginx.conf"));

    assert_eq!(interface_config.matches("CUSTOM_CSS_URL").count(), 1);
    assert_eq!(install.matches("git clone").count(), 1);
    assert_eq!(nginx.matches("X-Frame-Options: ALLOWALL").count(), 1);
    assert_eq!(nginx.matches("X-Powered-By: LiberChat").count(), 1);
    assert_eq!([interface_config, install, nginx], first_pass);

    let summary = second.summary();
    assert_eq!(summary.already_applied, 3);
    assert_eq!(summary.replaced, 0);
    assert_eq!(second.change_log().count(ChangeAction::TextReplaced), 0);
}
