use serde::{Deserialize, Serialize};
use crate::config::constants::{ACCENT_COLOR_VAR, PRIMARY_COLOR_VAR, SECONDARY_COLOR_VAR};
use crate::helpers::config_helper::ConfigHelper;

/// Red/black palette applied to the conferencing UI.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    #[serde(default = "ConfigHelper::default_primary_color")]
    pub primary: String,

    #[serde(default = "ConfigHelper::default_secondary_color")]
    pub secondary: String,

    #[serde(default = "ConfigHelper::default_accent_color")]
    pub accent: String,
}

impl ThemeConfig {
    /// Custom property name to color, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            (PRIMARY_COLOR_VAR, self.primary.as_str()),
            (SECONDARY_COLOR_VAR, self.secondary.as_str()),
            (ACCENT_COLOR_VAR, self.accent.as_str()),
        ]
    }

    pub fn color_count(&self) -> usize {
        self.entries().len()
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: ConfigHelper::default_primary_color(),
            secondary: ConfigHelper::default_secondary_color(),
            accent: ConfigHelper::default_accent_color(),
        }
    }
}
