use std::path::{Path, PathBuf};
use chrono::Local;
use crate::config::constants::{
    CUSTOM_CSS_PATH, DEPLOY_SCRIPT_MODE, HTML_FILES, INSTALL_SCRIPT_PATH, INTERFACE_CONFIG_PATH, MANIFEST_PATH,
    NGINX_CONFIG_PATH, PACKAGE_JSON_PATH, README_FILES,
};
use crate::enums::change_action::ChangeAction;
use crate::enums::replace_outcome::ReplaceOutcome;
use crate::errors::{CustomizerError, CustomizerResult};
use crate::logger::change_logger::ChangeLogger;
use crate::services::deploy_script_generator::DeployScriptGenerator;
use crate::services::file_modifier::FileModifier;
use crate::services::rebrand_rules;
use crate::services::report_generator::{ReportContext, ReportGenerator};
use crate::services::stylesheet_generator::StylesheetGenerator;
use crate::structs::change_log::ChangeLog;
use crate::structs::config::config::Config;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::run_summary::RunSummary;
use crate::structs::substitution::Substitution;
use crate::structs::theme_config::ThemeConfig;

/// Rebrands one Jitsi Meet checkout and its YunoHost package.
pub struct Customizer {
    jitsi_root: PathBuf,
    yunohost_root: PathBuf,
    theme: ThemeConfig,
    logo_url: String,
    output: OutputConfig,
    log: ChangeLog,
    summary: RunSummary,
}

impl Customizer {
    /// Fails with [`CustomizerError::MissingRoot`] before touching anything if either root is absent.
    pub fn new(jitsi_root: impl Into<PathBuf>, yunohost_root: impl Into<PathBuf>, config: Config) -> CustomizerResult<Self> {
        let jitsi_root = jitsi_root.into();
        let yunohost_root = yunohost_root.into();

        if !jitsi_root.is_dir() {
            return Err(CustomizerError::missing_root("Jitsi Meet", &jitsi_root));
        }
        if !yunohost_root.is_dir() {
            return Err(CustomizerError::missing_root("YunoHost", &yunohost_root));
        }

        Ok(Self {
            jitsi_root,
            yunohost_root,
            theme: config.theme,
            logo_url: config.branding.logo_url,
            output: config.output,
            log: ChangeLog::new(),
            summary: RunSummary::default(),
        })
    }

    pub fn jitsi_root(&self) -> &Path {
        &self.jitsi_root
    }

    pub fn yunohost_root(&self) -> &Path {
        &self.yunohost_root
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn change_log(&self) -> &ChangeLog {
        &self.log
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    fn apply(&mut self, file_path: &Path, substitutions: &[Substitution]) -> Vec<ReplaceOutcome> {
        let outcomes = FileModifier::apply_substitutions(&mut self.log, file_path, substitutions);
        for outcome in &outcomes {
            self.summary.tally(outcome);
        }
        outcomes
    }

    pub fn create_custom_css(&mut self) -> CustomizerResult<PathBuf> {
        let css_path = self.jitsi_root.join(CUSTOM_CSS_PATH);
        let css = StylesheetGenerator::render(&self.theme, &self.logo_url);
        let details = format!("Red/black theme with {} colors", self.theme.color_count());

        FileModifier::create_file(&mut self.log, &css_path, &css, &details)?;
        Ok(css_path)
    }

    pub fn modify_interface_config(&mut self) -> Vec<ReplaceOutcome> {
        let path = self.jitsi_root.join(INTERFACE_CONFIG_PATH);
        let rules = rebrand_rules::interface_config_rules(&self.logo_url);
        self.apply(&path, &rules)
    }

    pub fn modify_package_json(&mut self) -> Vec<ReplaceOutcome> {
        let path = self.jitsi_root.join(PACKAGE_JSON_PATH);
        self.apply(&path, &rebrand_rules::package_json_rules())
    }

    /// Only the candidate HTML files that exist are edited.
    pub fn modify_html_files(&mut self) -> Vec<ReplaceOutcome> {
        let rules = rebrand_rules::html_rules();
        let mut outcomes = Vec::new();

        for html_file in HTML_FILES {
            let path = self.jitsi_root.join(html_file);
            if path.exists() {
                outcomes.extend(self.apply(&path, &rules));
            } else {
                log::debug!("Skipping absent HTML file {}", path.display());
            }
        }

        outcomes
    }

    pub fn modify_yunohost_manifest(&mut self) -> Vec<ReplaceOutcome> {
        let path = self.yunohost_root.join(MANIFEST_PATH);
        self.apply(&path, &rebrand_rules::manifest_rules())
    }

    pub fn modify_yunohost_install_script(&mut self) -> Vec<ReplaceOutcome> {
        let path = self.yunohost_root.join(INSTALL_SCRIPT_PATH);
        self.apply(&path, &rebrand_rules::install_script_rules())
    }

    pub fn modify_nginx_config(&mut self) -> Vec<ReplaceOutcome> {
        let path = self.yunohost_root.join(NGINX_CONFIG_PATH);
        self.apply(&path, &rebrand_rules::nginx_rules())
    }

    pub fn modify_readme_files(&mut self) -> Vec<ReplaceOutcome> {
        let yunohost_rules = rebrand_rules::yunohost_readme_rules();
        let jitsi_rules = rebrand_rules::jitsi_readme_rules();
        let mut outcomes = Vec::new();

        for readme_file in README_FILES {
            let yunohost_readme = self.yunohost_root.join(readme_file);
            if yunohost_readme.exists() {
                outcomes.extend(self.apply(&yunohost_readme, &yunohost_rules));
            }

            let jitsi_readme = self.jitsi_root.join(readme_file);
            if jitsi_readme.exists() {
                outcomes.extend(self.apply(&jitsi_readme, &jitsi_rules));
            }
        }

        outcomes
    }

    pub fn create_deployment_script(&mut self) -> CustomizerResult<PathBuf> {
        let script_path = self.output.deploy_script_path.clone();
        let script = DeployScriptGenerator::render(&self.jitsi_root, &self.yunohost_root);

        FileModifier::create_file(&mut self.log, &script_path, &script, "Deployment script")?;
        FileModifier::make_executable(&script_path, DEPLOY_SCRIPT_MODE)?;

        self.summary.deploy_script_path = Some(script_path.clone());
        Ok(script_path)
    }

    /// Renders the records gathered so far, then records the report itself.
    pub fn generate_report(&mut self) -> CustomizerResult<PathBuf> {
        let report_path = self.output.report_path.clone();
        let report = ReportGenerator::render(&ReportContext {
            records: self.log.records(),
            theme: &self.theme,
            logo_url: &self.logo_url,
            jitsi_root: &self.jitsi_root,
            yunohost_root: &self.yunohost_root,
            deploy_script_path: &self.output.deploy_script_path,
            generated_at: Local::now(),
        });

        FileModifier::create_file(&mut self.log, &report_path, &report, "Modification report")?;
        self.summary.report_path = Some(report_path.clone());
        Ok(report_path)
    }

    /// Serializes the full change log when a JSON destination is configured.
    pub fn write_json_log(&mut self) -> CustomizerResult<Option<PathBuf>> {
        let Some(json_path) = self.output.json_log_path.clone() else {
            return Ok(None);
        };

        let json = self.log.to_json()?;
        std::fs::write(&json_path, json)
            .map_err(|e| CustomizerError::file_error(&json_path, "write", &e.to_string()))?;
        log::info!("🗂️  Change log written to {}", json_path.display());

        self.summary.json_log_path = Some(json_path.clone());
        Ok(Some(json_path))
    }

    pub fn set_json_log_path(&mut self, path: Option<PathBuf>) {
        if path.is_some() {
            self.output.json_log_path = path;
        }
    }

    /// Runs every step in the fixed order and returns the run summary.
    pub fn run_all_modifications(&mut self) -> CustomizerResult<RunSummary> {
        ChangeLogger::print_banner();

        ChangeLogger::print_step(1, "Creating the custom CSS theme");
        self.create_custom_css()?;

        ChangeLogger::print_step(2, "Editing interface_config.js");
        self.modify_interface_config();

        ChangeLogger::print_step(3, "Editing package.json");
        self.modify_package_json();

        ChangeLogger::print_step(4, "Editing HTML files");
        self.modify_html_files();

        ChangeLogger::print_step(5, "Editing the YunoHost manifest");
        self.modify_yunohost_manifest();

        ChangeLogger::print_step(6, "Editing the YunoHost install script");
        self.modify_yunohost_install_script();

        ChangeLogger::print_step(7, "Editing the nginx configuration");
        self.modify_nginx_config();

        ChangeLogger::print_step(8, "Editing README files");
        self.modify_readme_files();

        ChangeLogger::print_step(9, "Creating the deployment script");
        self.create_deployment_script()?;

        ChangeLogger::print_step(10, "Generating the report");
        self.generate_report()?;
        self.write_json_log()?;

        self.summary.total_records = self.log.len();
        log::debug!(
            "{} backups, {} replacements, {} files created",
            self.log.count(ChangeAction::BackupCreated),
            self.log.count(ChangeAction::TextReplaced),
            self.log.count(ChangeAction::FileCreated)
        );

        Ok(self.summary.clone())
    }
}
