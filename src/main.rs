// Entry point of the TryHackMe badge updater.
//
// **Architecture Overview:**
// - `core/` = Stats model, badge rendering and the run itself (no I/O details)
// - `infra/` = Implementations of core traits (HTTP client, file output)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Run the badge job once
//
// The scheduler that calls this binary also commits the output, so the exit
// status is always 0: a failed fetch shows up as the fallback badge and in logs.

#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

use tracing_subscriber::EnvFilter;

use crate::core::badge::{BadgeConfig, BadgeJob, RunOutcome};
use crate::infra::assets::AssetFileStore;
use crate::infra::tryhackme::TryHackMeClient;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let config = BadgeConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");

    if let Err(e) = run(&config).await {
        tracing::error!("Badge update failed: {:#}", e);
    }
}

async fn run(config: &BadgeConfig) -> anyhow::Result<RunOutcome> {
    let client = TryHackMeClient::new(config)?;
    let store = AssetFileStore::new(&config.badge_path, &config.stats_path);
    let job = BadgeJob::new(client, store, config.username.clone());

    let outcome = job.run().await?;
    match &outcome {
        RunOutcome::Updated(stats) => tracing::info!(
            rank = %stats.rank,
            badge = %config.badge_path.display(),
            stats = %config.stats_path.display(),
            "Assets written"
        ),
        RunOutcome::Fallback { error } => tracing::warn!(
            badge = %config.badge_path.display(),
            "Fallback badge written ({})",
            error
        ),
    }
    Ok(outcome)
}
