pub const DEFAULT_JITSI_PATH: &str = "./jitsi-meet";
pub const DEFAULT_YUNOHOST_PATH: &str = "./jitsi_ynh";
pub const CONFIG_FILE_LOCATION: &str = "liberchat/config.toml";

pub const BACKUP_SUFFIX: &str = ".backup";
pub const PREVIEW_CHARS: usize = 50;

// Branding
pub const OLD_APP_NAME: &str = "Jitsi Meet";
pub const NEW_APP_NAME: &str = "LiberChat Vidéo";
pub const OLD_APP_SLUG: &str = "jitsi-meet";
pub const NEW_APP_SLUG: &str = "liberchat-video";
pub const DEFAULT_LOGO_URL: &str = "images/liberchat-logo.png";

// Theme
pub const PRIMARY_COLOR_VAR: &str = "--primary-color";
pub const SECONDARY_COLOR_VAR: &str = "--secondary-color";
pub const ACCENT_COLOR_VAR: &str = "--accent-color";
pub const DEFAULT_PRIMARY_COLOR: &str = "#8B0000";
pub const DEFAULT_SECONDARY_COLOR: &str = "#000000";
pub const DEFAULT_ACCENT_COLOR: &str = "#FF0000";

// Files under the Jitsi Meet root
pub const CUSTOM_CSS_PATH: &str = "css/custom.css";
pub const INTERFACE_CONFIG_PATH: &str = "interface_config.js";
pub const PACKAGE_JSON_PATH: &str = "package.json";
pub const HTML_FILES: &[&str] = &[
    "index.html",
    "base.html",
    "head.html",
    "title.html",
    "body.html",
    "fonts.html",
    "plugin.head.html",
];

// Files under the YunoHost root
pub const MANIFEST_PATH: &str = "manifest.toml";
pub const INSTALL_SCRIPT_PATH: &str = "scripts/install";
pub const NGINX_CONFIG_PATH: &str = "conf/nginx.conf";

// Present under both roots
pub const README_FILES: &[&str] = &["README.md", "README_fr.md"];

// Written to the working directory
pub const DEFAULT_DEPLOY_SCRIPT_PATH: &str = "deploy_liberchat.sh";
pub const DEFAULT_REPORT_PATH: &str = "rapport_modifications_liberchat.md";

// Anchors
pub const CSS_INJECTION_ANCHOR: &str = "makeJsonParserHappy: 'even if last key had a trailing comma'";
pub const INSTALL_SCRIPT_ANCHOR: &str = "_setup_sources";
pub const NGINX_SSI_ANCHOR: &str = "ssi_types application/x-javascript application/javascript;";
pub const NGINX_FRAME_ANCESTORS_OLD: &str =
    "more_set_headers \"Content-Security-Policy: frame-ancestors 'self'\";";
pub const NGINX_FRAME_ANCESTORS_NEW: &str =
    "more_set_headers \"Content-Security-Policy: frame-ancestors *\";";

pub const DEPLOY_SCRIPT_MODE: u32 = 0o755;
