use anyhow::{Context, Result};
use clap::Parser;
use locale_sync::{sync, SyncConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "locale-sync")]
#[command(about = "Synchronize localization catalogs into entity translation files")]
struct Cli {
    /// Directory holding per-locale source catalogs (<locale>.json)
    #[arg(long)]
    source_dir: PathBuf,

    /// Directory holding the per-locale entity translation files
    #[arg(long)]
    target_dir: PathBuf,

    /// Locale used as the single fallback hop when the primary misses
    #[arg(long, default_value = "en")]
    fallback_locale: String,

    /// Restrict the run to the given locales (repeatable; default: all supported)
    #[arg(long = "locale")]
    locales: Vec<String>,

    /// Log per-field resolution detail
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = SyncConfig::new(&cli.source_dir, &cli.target_dir)
        .fallback_locale(&cli.fallback_locale);
    if !cli.locales.is_empty() {
        config = config.locales(cli.locales.clone());
    }

    sync::run(&config).with_context(|| {
        format!(
            "synchronizing {} -> {}",
            cli.source_dir.display(),
            cli.target_dir.display()
        )
    })
}
