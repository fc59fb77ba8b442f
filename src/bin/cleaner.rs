// src/bin/cleaner.rs

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use NewsCleaner::config::cleaner::Args;
use NewsCleaner::config::{load_cleaning_config, CleaningConfig};
use NewsCleaner::job::{run_cleaning_job, CleaningJob};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the cleaned table
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")); // Default to info if RUST_LOG is not set
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => {
            info!("Loading cleaning configuration from {}", path.display());
            load_cleaning_config(path)?
        }
        None => CleaningConfig::default(),
    };

    if args.validate_config {
        config.validate()?;
        info!(?config, "Cleaning configuration is valid");
        return Ok(());
    }

    let job = CleaningJob {
        input: args.filename.clone(),
        newspaper_uid: args.newspaper_uid.clone(),
        output: args.output.clone(),
        config,
    };

    let outcome = run_cleaning_job(&job)
        .inspect_err(|e| error!(error = %e, "Cleaning failed"))
        .with_context(|| format!("failed to clean '{}'", args.filename.display()))?;

    println!("{}", outcome.table);
    Ok(())
}
