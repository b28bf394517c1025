//! relayctl
//!
//! Validate, inspect and preview tuning of relay configurations for
//! unreachable peers.

mod summary;

use clap::{Parser, Subcommand};
use relay_config::{RelayConfiguration, RelayKind};
use std::path::{Path, PathBuf};

/// relayctl - relay configuration tool
#[derive(Parser)]
#[command(name = "relayctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a relay configuration file
    Check {
        /// Configuration file (TOML)
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Show the default tunables of a relay strategy
    Defaults {
        /// Relay strategy (plain or push)
        #[arg(short, long, default_value = "plain")]
        strategy: RelayKind,
    },

    /// Preview a configuration with tuned values (the file is not modified)
    Tune {
        /// Configuration file (TOML)
        #[arg(required = true)]
        file: PathBuf,

        /// Peer map update interval in seconds
        #[arg(long)]
        interval: Option<u32>,

        /// Push send retries (push relay only)
        #[arg(long)]
        retries: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose { "debug" } else { "info" })
        .init();

    match cli.command {
        Commands::Check { file } => check(file)?,
        Commands::Defaults { strategy } => print_lines(&summary::render_defaults(strategy)),
        Commands::Tune {
            file,
            interval,
            retries,
        } => tune(file, interval, retries)?,
    }

    Ok(())
}

/// Load and validate a configuration file
fn check(file: PathBuf) -> anyhow::Result<()> {
    let config = load(&file)?;
    println!("{} is valid", file.display());
    print_lines(&summary::render(&config));
    Ok(())
}

/// Apply tuning to a loaded configuration and print the result
fn tune(file: PathBuf, interval: Option<u32>, retries: Option<u32>) -> anyhow::Result<()> {
    let mut config = load(&file)?;

    if let Some(secs) = interval {
        config.set_peer_map_update_interval_secs(secs)?;
    }
    if let Some(retries) = retries {
        config.set_push_send_retries(retries)?;
    }

    tracing::debug!("tuned: {}", config);
    print_lines(&summary::render(&config));
    Ok(())
}

fn load(file: &Path) -> anyhow::Result<RelayConfiguration> {
    Ok(RelayConfiguration::load(file)?)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
