use askama::Template;
use chrono::{DateTime, Utc};

use crate::core::stats::{PlayerStats, StatValue};

/// The fixed 400x120 badge. Every interpolated value goes through the XML escaper.
#[derive(Template)]
#[template(path = "badge.svg", escape = "xml")]
struct BadgeTemplate<'a> {
    username: &'a str,
    rank: &'a StatValue,
    level: &'a StatValue,
    streak: i64,
    updated: String,
}

/// Renders the badge SVG. Pure: the same arguments always give the same bytes.
pub fn render_badge(
    rank: &StatValue,
    level: &StatValue,
    streak: i64,
    username: &str,
    now: DateTime<Utc>,
) -> Result<String, askama::Error> {
    BadgeTemplate {
        username,
        rank,
        level,
        streak,
        updated: now.format("%Y-%m-%d %H:%M").to_string(),
    }
    .render()
}

/// Convenience wrapper for a full stats record.
pub fn render_stats(
    stats: &PlayerStats,
    username: &str,
    now: DateTime<Utc>,
) -> Result<String, askama::Error> {
    render_badge(&stats.rank, &stats.level, stats.streak, username, now)
}
