use serde::{Deserialize, Serialize};
use crate::structs::config::branding_config::BrandingConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::theme_config::ThemeConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub branding: BrandingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
