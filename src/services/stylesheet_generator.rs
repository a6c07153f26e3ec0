use std::fmt::Write;
use crate::structs::theme_config::ThemeConfig;

pub struct StylesheetGenerator;

impl StylesheetGenerator {

    /// Renders the red/black stylesheet. Same theme and logo give the same bytes.
    pub fn render(theme: &ThemeConfig, logo_url: &str) -> String {
        let primary = theme.primary.as_str();
        let secondary = theme.secondary.as_str();
        let accent = theme.accent.as_str();

        let mut css = String::from("/* LiberChat Vidéo - custom red/black theme */\n\n:root {\n");
        for (name, color) in theme.entries() {
            let _ = writeln!(css, "    {}: {};", name, color);
        }
        css.push_str("}\n");

        let blocks: [(&str, &str, String); 13] = [
            ("Main colors", ".toolbox-background", format!("    background: linear-gradient(135deg, {}, {});\n", primary, secondary)),
            ("", ".header", format!("    background-color: {};\n", secondary)),
            ("Buttons", ".toolbox-button", format!("    background-color: {};\n    border: 1px solid {};\n", primary, accent)),
            ("", ".toolbox-button:hover", format!("    background-color: {};\n", accent)),
            ("Chat", ".chat-container", format!("    background-color: rgba(0, 0, 0, 0.8);\n    border-left: 3px solid {};\n", accent)),
            ("Participants", ".participant-container", format!("    border: 2px solid {};\n", primary)),
            (
                "Custom logo",
                ".watermark",
                format!(
                    "    background-image: url('{}');\n    background-size: contain;\n    background-repeat: no-repeat;\n    width: 120px;\n    height: 40px;\n",
                    logo_url
                ),
            ),
            ("Welcome page", ".welcome-page", format!("    background: linear-gradient(135deg, {}, {});\n", secondary, primary)),
            ("", ".welcome-page .header", "    color: white;\n".to_string()),
            ("Notifications", ".notification", format!("    background-color: {};\n    border-left: 4px solid {};\n", primary, accent)),
            ("Progress bar", ".progress-bar", format!("    background-color: {};\n", accent)),
            ("Modals", ".modal", "    background-color: rgba(0, 0, 0, 0.9);\n".to_string()),
            (
                "",
                ".modal-content",
                format!("    background-color: {};\n    border: 2px solid {};\n    color: white;\n", secondary, primary),
            ),
        ];

        for (section, selector, body) in blocks.iter() {
            css.push('\n');
            if !section.is_empty() {
                let _ = writeln!(css, "/* {} */", section);
            }
            let _ = write!(css, "{} {{\n{}}}\n", selector, body);
        }

        css
    }
}
