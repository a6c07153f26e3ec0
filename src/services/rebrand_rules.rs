//! Literal (old, new) tables for every third-party file the rebrand touches.

use crate::config::constants::{
    CSS_INJECTION_ANCHOR, CUSTOM_CSS_PATH, INSTALL_SCRIPT_ANCHOR, NEW_APP_NAME, NEW_APP_SLUG,
    NGINX_FRAME_ANCESTORS_NEW, NGINX_FRAME_ANCESTORS_OLD, NGINX_SSI_ANCHOR, OLD_APP_NAME, OLD_APP_SLUG,
};
use crate::structs::substitution::Substitution;

const PACKAGE_JSON_RULES: &[(&str, &str)] = &[
    ("\"name\": \"jitsi-meet\"", "\"name\": \"liberchat-video\""),
    (
        "\"description\": \"A sample app for the Jitsi Videobridge\"",
        "\"description\": \"Application de vidéoconférence LiberChat\"",
    ),
];

const MANIFEST_RULES: &[(&str, &str)] = &[
    ("id = \"jitsi\"", "id = \"liberchat-video\""),
    ("name = \"Jitsi Meet\"", "name = \"LiberChat Vidéo\""),
    (
        "description.en = \"Video conferencing web application\"",
        "description.en = \"LiberChat video conferencing application\"",
    ),
    (
        "description.fr = \"Application web de conférence vidéo\"",
        "description.fr = \"Application de vidéoconférence LiberChat\"",
    ),
    ("website = \"https://jitsi.org/\"", "website = \"https://liberchat.org/\""),
    ("demo = \"https://meet.jit.si/\"", "demo = \"https://meet.liberchat.org/\""),
];

const FORK_SETUP: &str = r#"
# Cloner le fork LiberChat personnalisé depuis UNionlibertaireAnarchiste-org
ynh_script_progression "Cloning LiberChat custom fork..."
git clone https://github.com/UNionlibertaireAnarchiste-org/jitsi-meet.git "$install_dir/jitsi-meet-web-custom"
cp -r "$install_dir/jitsi-meet-web-custom/"* "$install_dir/jitsi-meet-web/"
"#;

const NGINX_EXTRA_HEADERS: &str = r#"
# Headers personnalisés LiberChat
more_set_headers "X-Frame-Options: ALLOWALL";
more_set_headers "X-Powered-By: LiberChat";"#;

fn table(pairs: &[(&str, &str)]) -> Vec<Substitution> {
    pairs.iter().copied().map(Substitution::from).collect()
}

pub fn interface_config_rules(logo_url: &str) -> Vec<Substitution> {
    let css_injection = format!(
        ",\n    // Injection du CSS personnalisé LiberChat\n    CUSTOM_CSS_URL: '{}',",
        CUSTOM_CSS_PATH
    );

    vec![
        Substitution::new("APP_NAME: 'Jitsi Meet'", "APP_NAME: 'LiberChat Vidéo'"),
        Substitution::new("PROVIDER_NAME: 'Jitsi'", "PROVIDER_NAME: 'LiberChat'"),
        Substitution::new(
            "DEFAULT_WELCOME_PAGE_LOGO_URL: 'images/watermark.svg'",
            format!("DEFAULT_WELCOME_PAGE_LOGO_URL: '{}'", logo_url),
        ),
        Substitution::new(
            "JITSI_WATERMARK_LINK: 'https://jitsi.org'",
            "JITSI_WATERMARK_LINK: 'https://liberchat.org'",
        ),
        Substitution::new("SHOW_JITSI_WATERMARK: true", "SHOW_JITSI_WATERMARK: false"),
        Substitution::new("SHOW_BRAND_WATERMARK: false", "SHOW_BRAND_WATERMARK: true"),
        Substitution::new("BRAND_WATERMARK_LINK: ''", format!("BRAND_WATERMARK_LINK: '{}'", logo_url)),
        Substitution::insert_after(CSS_INJECTION_ANCHOR, &css_injection),
    ]
}

pub fn package_json_rules() -> Vec<Substitution> {
    table(PACKAGE_JSON_RULES)
}

pub fn html_rules() -> Vec<Substitution> {
    vec![
        Substitution::new(OLD_APP_NAME, NEW_APP_NAME),
        Substitution::new(OLD_APP_SLUG, NEW_APP_SLUG),
        // Usually already covered by the plain name rename above.
        Substitution::new(
            format!("<title>{}</title>", OLD_APP_NAME),
            format!("<title>{}</title>", NEW_APP_NAME),
        ),
    ]
}

pub fn manifest_rules() -> Vec<Substitution> {
    table(MANIFEST_RULES)
}

pub fn install_script_rules() -> Vec<Substitution> {
    vec![Substitution::insert_after(INSTALL_SCRIPT_ANCHOR, FORK_SETUP)]
}

pub fn nginx_rules() -> Vec<Substitution> {
    vec![
        Substitution::new(NGINX_FRAME_ANCESTORS_OLD, NGINX_FRAME_ANCESTORS_NEW),
        Substitution::insert_after(NGINX_SSI_ANCHOR, NGINX_EXTRA_HEADERS),
    ]
}

pub fn yunohost_readme_rules() -> Vec<Substitution> {
    vec![
        Substitution::new(format!("# {}", OLD_APP_NAME), format!("# {}", NEW_APP_NAME)),
        Substitution::new(OLD_APP_NAME, NEW_APP_NAME),
        Substitution::new(OLD_APP_SLUG, NEW_APP_SLUG),
    ]
}

pub fn jitsi_readme_rules() -> Vec<Substitution> {
    vec![
        Substitution::new(format!("# {}", OLD_APP_NAME), format!("# {}", NEW_APP_NAME)),
        Substitution::new(OLD_APP_NAME, NEW_APP_NAME),
    ]
}
