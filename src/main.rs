// ABOUTME: CLI entrypoint for traduora-sync command
// ABOUTME: Sets up logging, runs the sync and maps fatal errors to exit codes

use clap::Parser;
use traduora_sync::{cli::Cli, config::USAGE_GUIDANCE, ConsoleObserver, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.config.exists() {
        eprintln!(
            "traduora-sync: configuration file not found: {}\n",
            cli.config.display()
        );
        eprintln!("{}", USAGE_GUIDANCE);
        std::process::exit(2);
    }

    if let Err(e) = run(&cli) {
        eprintln!("traduora-sync: [E{}] {}", e.exit_code(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut observer = ConsoleObserver::new();
    let report = traduora_sync::run(&cli.config, &cli.sync_options(), &mut observer)?;

    for (locale, message) in &report.failed {
        eprintln!("  {} failed: {}", locale, message);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,traduora_sync=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
