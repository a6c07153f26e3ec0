use std::path::PathBuf;
use clap::Parser;
use crate::config::constants::{DEFAULT_JITSI_PATH, DEFAULT_YUNOHOST_PATH};

#[derive(Parser, Debug)]
#[clap(name = "liberchat-customizer")]
#[clap(about = "Rebrands Jitsi Meet and its YunoHost package as LiberChat Vidéo", long_about = None)]
pub struct Cli {
    /// Jitsi Meet checkout to rebrand
    #[clap(long, default_value = DEFAULT_JITSI_PATH)]
    pub jitsi_path: PathBuf,

    /// YunoHost package directory to rebrand
    #[clap(long, default_value = DEFAULT_YUNOHOST_PATH)]
    pub yunohost_path: PathBuf,

    /// Print a notice and exit without touching the filesystem
    #[clap(long)]
    pub dry_run: bool,

    /// TOML configuration file (defaults to ~/liberchat/config.toml when present)
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the change log as JSON to this path
    #[clap(long)]
    pub json_log: Option<PathBuf>,

    #[clap(short, long)]
    pub verbose: bool,
}
