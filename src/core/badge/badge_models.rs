use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::stats::PlayerStats;

pub const DEFAULT_USERNAME: &str = "anishalx";
pub const DEFAULT_API_BASE: &str = "https://tryhackme.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BADGE_PATH: &str = "assets/tryhackme-badge.svg";
pub const DEFAULT_STATS_PATH: &str = "assets/thm-stats.json";

/// The JSON sidecar written after a successful fetch.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    #[serde(flatten)]
    pub stats: PlayerStats,
    pub success: bool,
    pub username: String,
    pub last_updated: DateTime<Utc>,
}

impl StatsSnapshot {
    pub fn new(stats: PlayerStats, username: impl Into<String>, last_updated: DateTime<Utc>) -> Self {
        Self {
            stats,
            success: true,
            username: username.into(),
            last_updated,
        }
    }
}

/// Runtime settings for one badge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeConfig {
    pub username: String,
    pub api_base: String,
    pub timeout: Duration,
    pub badge_precheck: bool,
    pub badge_path: PathBuf,
    pub stats_path: PathBuf,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            badge_precheck: false,
            badge_path: PathBuf::from(DEFAULT_BADGE_PATH),
            stats_path: PathBuf::from(DEFAULT_STATS_PATH),
        }
    }
}

impl BadgeConfig {
    /// Reads the `THM_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BadgeConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = match get("THM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid THM_TIMEOUT_SECS, using default");
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };

        let badge_precheck = match get("THM_BADGE_PRECHECK") {
            Some(raw) => raw.trim().parse::<bool>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid THM_BADGE_PRECHECK, using default");
                defaults.badge_precheck
            }),
            None => defaults.badge_precheck,
        };

        Self {
            username: get("THM_USERNAME").unwrap_or(defaults.username),
            api_base: get("THM_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            timeout: Duration::from_secs(timeout_secs),
            badge_precheck,
            badge_path: get("THM_BADGE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.badge_path),
            stats_path: get("THM_STATS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.stats_path),
        }
    }
}
