use super::badge_models::StatsSnapshot;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Destination for the rendered badge and its JSON sidecar.
/// Both writes replace whatever was there before.
#[async_trait]
pub trait BadgeStore: Send + Sync {
    async fn write_badge(&self, svg: &str) -> Result<(), StoreError>;
    async fn write_snapshot(&self, snapshot: &StatsSnapshot) -> Result<(), StoreError>;
}
