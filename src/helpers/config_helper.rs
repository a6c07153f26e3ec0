use std::path::PathBuf;
use crate::config::constants::{
    DEFAULT_ACCENT_COLOR, DEFAULT_DEPLOY_SCRIPT_PATH, DEFAULT_LOGO_URL, DEFAULT_PRIMARY_COLOR,
    DEFAULT_REPORT_PATH, DEFAULT_SECONDARY_COLOR,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_primary_color() -> String {
        DEFAULT_PRIMARY_COLOR.to_string()
    }

    pub fn default_secondary_color() -> String {
        DEFAULT_SECONDARY_COLOR.to_string()
    }

    pub fn default_accent_color() -> String {
        DEFAULT_ACCENT_COLOR.to_string()
    }

    pub fn default_logo_url() -> String {
        DEFAULT_LOGO_URL.to_string()
    }

    pub fn default_report_path() -> PathBuf {
        PathBuf::from(DEFAULT_REPORT_PATH)
    }

    pub fn default_deploy_script_path() -> PathBuf {
        PathBuf::from(DEFAULT_DEPLOY_SCRIPT_PATH)
    }
}
