use async_trait::async_trait;

use super::stats_models::StatsResult;

/// Anything that can look up a player's badge stats.
///
/// Implementations must fold every failure (HTTP status, bad body, transport
/// fault) into the `Err` side instead of panicking.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self, username: &str) -> StatsResult;
}
