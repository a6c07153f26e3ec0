use std::path::Path;

pub struct DeployScriptGenerator;

impl DeployScriptGenerator {

    /// Renders the bash deployment script with both roots baked in.
    pub fn render(jitsi_root: &Path, yunohost_root: &Path) -> String {
        format!(
            r#"#!/bin/bash
# LiberChat Vidéo deployment script
# Generated automatically by liberchat-customizer

set -e

echo "🚀 Deploying LiberChat Vidéo..."

# Variables
JITSI_DIR="{jitsi}"
YUNOHOST_DIR="{yunohost}"
BACKUP_DIR="./backup-$(date +%Y%m%d-%H%M%S)"

# Back up both trees
echo "📦 Creating backup..."
mkdir -p "$BACKUP_DIR"
cp -r "$JITSI_DIR" "$BACKUP_DIR/" 2>/dev/null || true
cp -r "$YUNOHOST_DIR" "$BACKUP_DIR/" 2>/dev/null || true

# Build Jitsi Meet
echo "🔨 Building Jitsi Meet..."
cd "$JITSI_DIR"
npm install
npm run build
cd - > /dev/null

# Package for YunoHost
echo "📦 Packaging for YunoHost..."
cd "$YUNOHOST_DIR"
# YunoHost specific packaging commands go here

echo "✅ Deployment finished!"
echo "📁 Backup available in: $BACKUP_DIR"
"#,
            jitsi = Self::escape(&jitsi_root.display().to_string()),
            yunohost = Self::escape(&yunohost_root.display().to_string()),
        )
    }

    /// Escapes a value for use inside a double-quoted bash string.
    fn escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            if matches!(c, '"' | '\\' | '$' | '`') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }
}
