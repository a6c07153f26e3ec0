use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BrandingConfig {
    #[serde(default = "ConfigHelper::default_logo_url")]
    pub logo_url: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            logo_url: ConfigHelper::default_logo_url(),
        }
    }
}
