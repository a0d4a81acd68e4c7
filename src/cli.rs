// ABOUTME: Command-line interface definitions using clap
// ABOUTME: Config path, output overrides, dry-run and verbosity flags

use crate::{config::DEFAULT_CONFIG_FILE, sync::SyncOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "traduora-sync")]
#[command(about = "Download Traduora translations into <locale>.lproj folders", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the key-value configuration file
    #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Export format (overrides FORMAT)
    #[arg(long)]
    pub format: Option<String>,

    /// Output directory (overrides LOCALIZATION_PATH)
    #[arg(long, short)]
    pub output: Option<String>,

    /// Authenticate and reconcile locales without downloading anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            dry_run: self.dry_run,
            format: self.format.clone(),
            output: self.output.clone(),
        }
    }
}
