use chrono::{DateTime, Utc};

use super::badge_models::StatsSnapshot;
use super::badge_renderer::render_stats;
use super::badge_store::{BadgeStore, StoreError};
use crate::core::stats::{PlayerStats, StatsSource};

#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

/// What a run ended up publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Real stats were rendered and the snapshot was refreshed.
    Updated(PlayerStats),
    /// The fetch failed; a placeholder badge was written instead.
    Fallback { error: String },
}

/// One fetch -> render -> write pass for a single user.
pub struct BadgeJob<S: StatsSource, B: BadgeStore> {
    source: S,
    store: B,
    username: String,
}

impl<S: StatsSource, B: BadgeStore> BadgeJob<S, B> {
    pub fn new(source: S, store: B, username: impl Into<String>) -> Self {
        Self {
            source,
            store,
            username: username.into(),
        }
    }

    pub async fn run(&self) -> Result<RunOutcome, BadgeError> {
        self.run_at(Utc::now()).await
    }

    /// Runs the job as if the clock read `now`.
    ///
    /// A fetch failure is not an error here: it produces the fallback badge and
    /// leaves any earlier snapshot alone. Only output problems surface as `Err`.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunOutcome, BadgeError> {
        tracing::info!(username = %self.username, "Fetching stats");

        match self.source.fetch(&self.username).await {
            Ok(stats) => {
                tracing::info!(
                    rank = %stats.rank,
                    level = %stats.level,
                    streak = stats.streak,
                    "Successfully fetched stats"
                );

                let svg = render_stats(&stats, &self.username, now)?;
                self.store.write_badge(&svg).await?;
                tracing::info!("Badge updated successfully");

                let snapshot = StatsSnapshot::new(stats.clone(), self.username.clone(), now);
                self.store.write_snapshot(&snapshot).await?;

                Ok(RunOutcome::Updated(stats))
            }
            Err(err) => {
                tracing::warn!("Failed to fetch stats: {}", err);

                let svg = render_stats(&PlayerStats::placeholder(), &self.username, now)?;
                self.store.write_badge(&svg).await?;
                tracing::info!("Created fallback badge due to API error");

                Ok(RunOutcome::Fallback {
                    error: err.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::{StatValue, StatsError, StatsResult};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::Mutex;

    struct CannedSource(StatsResult);

    #[async_trait]
    impl StatsSource for CannedSource {
        async fn fetch(&self, _username: &str) -> StatsResult {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        badges: Mutex<Vec<String>>,
        snapshots: Mutex<Vec<serde_json::Value>>,
    }

    #[async_trait]
    impl BadgeStore for RecordingStore {
        async fn write_badge(&self, svg: &str) -> Result<(), StoreError> {
            self.badges.lock().unwrap().push(svg.to_string());
            Ok(())
        }

        async fn write_snapshot(&self, snapshot: &StatsSnapshot) -> Result<(), StoreError> {
            self.snapshots
                .lock()
                .unwrap()
                .push(serde_json::to_value(snapshot)?);
            Ok(())
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn sample_stats() -> PlayerStats {
        PlayerStats {
            rank: StatValue::from(42),
            level: StatValue::from("Hacker"),
            streak: 7,
        }
    }

    #[tokio::test]
    async fn test_success_writes_badge_and_snapshot() {
        let job = BadgeJob::new(
            CannedSource(Ok(sample_stats())),
            RecordingStore::default(),
            "alice",
        );

        let outcome = job.run_at(now()).await.unwrap();
        assert_eq!(outcome, RunOutcome::Updated(sample_stats()));

        let badges = job.store.badges.lock().unwrap();
        assert_eq!(badges.len(), 1);
        assert!(badges[0].contains("alice"));
        assert!(badges[0].contains("Rank: 42"));

        let snapshots = job.store.snapshots.lock().unwrap();
        assert_eq!(
            snapshots[0],
            serde_json::json!({
                "rank": 42,
                "level": "Hacker",
                "streak": 7,
                "success": true,
                "username": "alice",
                "last_updated": "2026-10-19T12:00:00Z"
            })
        );
    }

    #[tokio::test]
    async fn test_failure_writes_only_fallback_badge() {
        let job = BadgeJob::new(
            CannedSource(Err(StatsError::ProfileStatus(404))),
            RecordingStore::default(),
            "alice",
        );

        let outcome = job.run_at(now()).await.unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Fallback {
                error: "Profile API HTTP 404".to_string()
            }
        );

        let badges = job.store.badges.lock().unwrap();
        assert_eq!(badges.len(), 1);
        assert!(badges[0].contains("alice"));
        assert!(badges[0].contains("Rank: Error"));
        assert!(badges[0].contains("Level: N/A"));
        assert!(badges[0].contains("Streak: 0 days"));
        assert!(job.store.snapshots.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeat_runs_differ_only_in_timestamp() {
        let job = BadgeJob::new(
            CannedSource(Ok(sample_stats())),
            RecordingStore::default(),
            "alice",
        );

        job.run_at(now()).await.unwrap();
        job.run_at(now() + chrono::Duration::minutes(5)).await.unwrap();

        let badges = job.store.badges.lock().unwrap();
        assert_eq!(
            badges[0].replace("2026-10-19 12:00", "<ts>"),
            badges[1].replace("2026-10-19 12:05", "<ts>")
        );
    }
}
