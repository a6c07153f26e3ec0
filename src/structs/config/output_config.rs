use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_report_path")]
    pub report_path: PathBuf,

    #[serde(default = "ConfigHelper::default_deploy_script_path")]
    pub deploy_script_path: PathBuf,

    #[serde(default)]
    pub json_log_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: ConfigHelper::default_report_path(),
            deploy_script_path: ConfigHelper::default_deploy_script_path(),
            json_log_path: None,
        }
    }
}
