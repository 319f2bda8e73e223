use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder used when the API omits rank or level.
pub const NOT_AVAILABLE: &str = "N/A";

/// Everything that can go wrong between asking for a profile and holding its stats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("Profile API HTTP {0}")]
    ProfileStatus(u16),
    #[error("Badge API HTTP {0}")]
    BadgeStatus(u16),
    #[error("Invalid JSON response")]
    InvalidJson,
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Unexpected(String),
}

/// Outcome of a single fetch. There is no partial success.
pub type StatsResult = Result<PlayerStats, StatsError>;

/// A stat as the API handed it to us: a number stays a number, anything else is text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
}

impl StatValue {
    pub fn text(value: impl Into<String>) -> Self {
        StatValue::Text(value.into())
    }

    pub fn not_available() -> Self {
        StatValue::text(NOT_AVAILABLE)
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Number(value.into())
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::text(value)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// The three numbers shown on the badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub rank: StatValue,
    pub level: StatValue,
    pub streak: i64,
}

impl PlayerStats {
    /// Stand-in values for the fallback badge.
    pub fn placeholder() -> Self {
        Self {
            rank: StatValue::text("Error"),
            level: StatValue::not_available(),
            streak: 0,
        }
    }
}
