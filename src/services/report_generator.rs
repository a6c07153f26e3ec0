use std::fmt::Write;
use std::path::Path;
use chrono::{DateTime, Local};
use crate::config::constants::{BACKUP_SUFFIX, NEW_APP_NAME, NEW_APP_SLUG, OLD_APP_NAME, OLD_APP_SLUG};
use crate::structs::change_record::ChangeRecord;
use crate::structs::theme_config::ThemeConfig;

/// Everything the markdown report is rendered from.
pub struct ReportContext<'a> {
    pub records: &'a [ChangeRecord],
    pub theme: &'a ThemeConfig,
    pub logo_url: &'a str,
    pub jitsi_root: &'a Path,
    pub yunohost_root: &'a Path,
    pub deploy_script_path: &'a Path,
    pub generated_at: DateTime<Local>,
}

pub struct ReportGenerator;

impl ReportGenerator {

    pub fn render(ctx: &ReportContext<'_>) -> String {
        let mut report = String::new();

        let _ = write!(
            report,
            "\n# LiberChat Vidéo customization report\nGenerated on: {}\n\n## Summary\n- **Total modifications**: {}\n- **Jitsi Meet directory**: {}\n- **YunoHost directory**: {}\n\n## Applied modifications\n\n",
            ctx.generated_at.format("%Y-%m-%d %H:%M:%S"),
            ctx.records.len(),
            ctx.jitsi_root.display(),
            ctx.yunohost_root.display(),
        );

        for (i, record) in ctx.records.iter().enumerate() {
            let _ = writeln!(report, "### {}. {}", i + 1, record.action);
            let _ = writeln!(report, "- **File**: `{}`", record.file);
            if !record.details.is_empty() {
                let _ = writeln!(report, "- **Details**: {}", record.details);
            }
            let _ = writeln!(report, "- **Timestamp**: {}\n", record.timestamp_iso());
        }

        let _ = write!(
            report,
            r#"
## Applied configuration

### Theme colors
- Primary color: {primary}
- Secondary color: {secondary}
- Accent color: {accent}

### Logo
- URL: {logo}

### Renames
- "{old_name}" → "{new_name}"
- "{old_slug}" → "{new_slug}"

### nginx configuration
- frame-ancestors: * (iframes allowed from anywhere)
- Custom headers added

## Backup files
Every modified file was saved with the `{suffix}` extension

## Next steps
1. Test the changes locally
2. Build the application with `npm run build`
3. Deploy with the `{deploy}` script
4. Check that everything works on YunoHost

## Restoring
To restore the original files:
```bash
find . -name "*{suffix}" -exec sh -c 'mv "$1" "${{1%{suffix}}}"' _ {{}} \;
```
"#,
            primary = ctx.theme.primary,
            secondary = ctx.theme.secondary,
            accent = ctx.theme.accent,
            logo = ctx.logo_url,
            old_name = OLD_APP_NAME,
            new_name = NEW_APP_NAME,
            old_slug = OLD_APP_SLUG,
            new_slug = NEW_APP_SLUG,
            suffix = BACKUP_SUFFIX,
            deploy = ctx.deploy_script_path.display(),
        );

        report
    }
}
