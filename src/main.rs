use std::process::ExitCode;
use clap::Parser;
use env_logger::Env;
use liberchat_customizer::structs::cli::Cli;
use liberchat_customizer::workers::command_runner::CommandRunner;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match CommandRunner::new().run_command(cli) {
        Ok(_) => ExitCode::SUCCESS,
        // Already reported by the runner.
        Err(e) => {
            log::debug!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
