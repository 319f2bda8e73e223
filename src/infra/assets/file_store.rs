use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::core::badge::{BadgeStore, StatsSnapshot, StoreError};

/// Writes the badge and its snapshot to fixed files, replacing previous contents.
pub struct AssetFileStore {
    badge_path: PathBuf,
    stats_path: PathBuf,
}

impl AssetFileStore {
    pub fn new(badge_path: impl AsRef<Path>, stats_path: impl AsRef<Path>) -> Self {
        Self {
            badge_path: badge_path.as_ref().to_path_buf(),
            stats_path: stats_path.as_ref().to_path_buf(),
        }
    }

    async fn write_file(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, contents).await?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote asset");
        Ok(())
    }
}

#[async_trait]
impl BadgeStore for AssetFileStore {
    async fn write_badge(&self, svg: &str) -> Result<(), StoreError> {
        Self::write_file(&self.badge_path, svg.as_bytes()).await
    }

    async fn write_snapshot(&self, snapshot: &StatsSnapshot) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(snapshot)?;
        Self::write_file(&self.stats_path, text.as_bytes()).await
    }
}
