use std::time::{Duration, Instant};
use anyhow::Context;
use crate::config::config_manager::ConfigManager;
use crate::errors::{CustomizerError, ErrorHandler};
use crate::logger::change_logger::ChangeLogger;
use crate::services::customizer::Customizer;
use crate::structs::cli::Cli;
use crate::structs::run_summary::RunSummary;

pub struct CommandRunner {
    start_time: Option<Instant>,
    completed_in: Option<Duration>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
            completed_in: None,
        }
    }

    /// Wall time of the last successful run.
    pub fn completed_in(&self) -> Option<Duration> {
        self.completed_in
    }

    /// Returns `Ok(None)` in simulation mode, which never touches the filesystem.
    pub fn run_command(&mut self, cli: Cli) -> anyhow::Result<Option<RunSummary>> {
        if cli.dry_run {
            println!("🔍 Simulation mode enabled - no modification will be applied");
            return Ok(None);
        }

        self.start_time = Some(Instant::now());
        let result = self.customize(cli);

        if let (Ok(_), Some(start)) = (&result, self.start_time) {
            let elapsed = start.elapsed();
            log::info!("⏱️  Customization completed in {:.2}s", elapsed.as_secs_f64());
            self.completed_in = Some(elapsed);
        }

        result.map(Some)
    }

    fn customize(&self, cli: Cli) -> anyhow::Result<RunSummary> {
        let config = ConfigManager::load(cli.config.as_deref())
            .map_err(Self::surface)
            .context("Failed to load configuration")?;

        let mut customizer = Customizer::new(&cli.jitsi_path, &cli.yunohost_path, config)
            .map_err(Self::surface)?;
        customizer.set_json_log_path(cli.json_log);

        let summary = customizer
            .run_all_modifications()
            .map_err(Self::surface)
            .context("Error during customization")?;

        ChangeLogger::print_summary(&summary);
        Ok(summary)
    }

    fn surface(error: CustomizerError) -> anyhow::Error {
        ErrorHandler::handle_error(&error);
        anyhow::Error::new(error)
    }
}
