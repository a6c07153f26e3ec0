use std::path::Path;
use crate::structs::change_record::ChangeRecord;
use crate::structs::run_summary::RunSummary;

pub struct ChangeLogger {}

impl ChangeLogger {

    pub fn print_record(record: &ChangeRecord) {
        println!("✓ {}: {}", record.action, record.file);
        if !record.details.is_empty() {
            println!("  → {}", record.details);
        }
    }

    pub fn print_step(index: usize, title: &str) {
        println!("\n{}. {}...", index, title);
    }

    pub fn print_file_missing(path: &Path) {
        log::warn!("⚠️  File not found: {}", path.display());
    }

    pub fn print_text_not_found(path: &Path, preview: &str) {
        log::warn!("⚠️  Text not found in {}: {}...", path.display(), preview);
    }

    pub fn print_already_applied(path: &Path, preview: &str) {
        log::info!("↺ Already applied in {}: {}...", path.display(), preview);
    }

    pub fn print_failure(path: &Path, reason: &str) {
        log::error!("❌ Error while modifying {}: {}", path.display(), reason);
    }

    pub fn print_banner() {
        println!("🎨 Starting LiberChat Vidéo customization...");
        println!("{}", "=".repeat(60));
    }

    pub fn print_summary(summary: &RunSummary) {
        println!("\n{}", "=".repeat(60));
        println!("🎉 Customization finished!");
        if let Some(report) = &summary.report_path {
            println!("📊 Detailed report: {}", report.display());
        }
        if let Some(json) = &summary.json_log_path {
            println!("🗂️  JSON change log: {}", json.display());
        }
        println!("🔧 {} modifications applied", summary.total_records);
        println!(
            "   {} replaced | {} already applied | {} text not found | {} files missing | {} failed",
            summary.replaced, summary.already_applied, summary.text_not_found, summary.files_missing, summary.failed
        );
        if summary.skipped() > 0 {
            println!("⚠️  Some substitutions were skipped, see the warnings above");
        }
        println!("\n📋 Next steps:");
        println!("1. Review the modification report");
        println!("2. Test the changes locally");
        match &summary.deploy_script_path {
            Some(script) => println!("3. Run {} to deploy", script.display()),
            None => println!("3. Build and deploy the rebranded application"),
        }
    }
}
