pub mod change_log;
pub mod change_record;
pub mod cli;
pub mod config;
pub mod run_summary;
pub mod substitution;
pub mod theme_config;
