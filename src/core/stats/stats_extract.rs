// Turns a profile response body into PlayerStats.
//
// Key names match the TryHackMe public profile API:
// - `globalRanking` -> rank
// - `userRank`, then `level` -> level
// - `currentStreak` -> streak

use serde_json::{Map, Value};

use super::stats_models::{PlayerStats, StatValue, StatsError, StatsResult};

/// How much of a response body we echo into the logs.
pub const LOG_BODY_LIMIT: usize = 500;

/// Parses a 2xx response body and pulls the badge stats out of it.
pub fn parse_profile(body: &str) -> StatsResult {
    let data: Value = serde_json::from_str(body).map_err(|e| {
        tracing::warn!("Failed to parse JSON response: {}", e);
        StatsError::InvalidJson
    })?;

    tracing::info!("Profile data keys: {}", key_summary(&data));
    extract_stats(&data)
}

/// Reads rank, level and streak from a decoded profile, applying defaults for missing keys.
pub fn extract_stats(data: &Value) -> StatsResult {
    let object = data.as_object().ok_or_else(|| {
        StatsError::Unexpected("Unexpected response shape: expected a JSON object".to_string())
    })?;

    let rank = lookup(object, "globalRanking").unwrap_or_else(StatValue::not_available);
    let level = lookup(object, "userRank")
        .or_else(|| lookup(object, "level"))
        .unwrap_or_else(StatValue::not_available);
    let streak = object.get("currentStreak").map(streak_value).unwrap_or(0);

    Ok(PlayerStats {
        rank,
        level,
        streak,
    })
}

// `null` counts as absent so the fallback chain still applies.
fn lookup(object: &Map<String, Value>, key: &str) -> Option<StatValue> {
    match object.get(key)? {
        Value::Null => None,
        Value::Number(n) => Some(StatValue::Number(n.clone())),
        Value::String(s) => Some(StatValue::Text(s.clone())),
        other => Some(StatValue::Text(other.to_string())),
    }
}

fn streak_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Comma-separated top-level keys, for diagnostics.
pub fn key_summary(data: &Value) -> String {
    match data.as_object() {
        Some(object) => object.keys().cloned().collect::<Vec<_>>().join(", "),
        None => "Not a dict".to_string(),
    }
}

/// Cuts `body` to at most `limit` characters without splitting a UTF-8 sequence.
pub fn truncate_for_log(body: &str, limit: usize) -> &str {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_all_fields() {
        let stats = extract_stats(&json!({
            "globalRanking": 42,
            "userRank": "Hacker",
            "currentStreak": 7
        }))
        .unwrap();

        assert_eq!(stats.rank, StatValue::from(42));
        assert_eq!(stats.level, StatValue::from("Hacker"));
        assert_eq!(stats.streak, 7);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let stats = extract_stats(&json!({"username": "alice"})).unwrap();
        assert_eq!(stats.rank, StatValue::not_available());
        assert_eq!(stats.level, StatValue::not_available());
        assert_eq!(stats.streak, 0);
    }

    #[test]
    fn test_level_falls_back_to_level_key() {
        let stats = extract_stats(&json!({"globalRanking": "1000", "level": 12})).unwrap();
        assert_eq!(stats.rank, StatValue::from("1000"));
        assert_eq!(stats.level, StatValue::from(12));
    }

    #[test]
    fn test_user_rank_wins_over_level() {
        let stats = extract_stats(&json!({"userRank": "Guru", "level": 30})).unwrap();
        assert_eq!(stats.level, StatValue::from("Guru"));
    }

    #[test]
    fn test_null_values_are_treated_as_missing() {
        let stats = extract_stats(&json!({
            "globalRanking": null,
            "userRank": null,
            "level": 5,
            "currentStreak": null
        }))
        .unwrap();
        assert_eq!(stats.rank, StatValue::not_available());
        assert_eq!(stats.level, StatValue::from(5));
        assert_eq!(stats.streak, 0);
    }

    #[test]
    fn test_streak_coercion() {
        assert_eq!(streak_value(&json!(3.9)), 3);
        assert_eq!(streak_value(&json!(" 12 ")), 12);
        assert_eq!(streak_value(&json!("lots")), 0);
        assert_eq!(streak_value(&json!([1])), 0);
    }

    #[test]
    fn test_non_object_is_unexpected() {
        let err = extract_stats(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, StatsError::Unexpected(_)));
    }

    #[test]
    fn test_parse_profile_rejects_malformed_body() {
        assert_eq!(
            parse_profile("<html>not json</html>").unwrap_err(),
            StatsError::InvalidJson
        );
    }

    #[test]
    fn test_key_summary() {
        assert_eq!(key_summary(&json!({"a": 1, "b": 2})), "a, b");
        assert_eq!(key_summary(&json!("text")), "Not a dict");
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        assert_eq!(truncate_for_log("héllo", 2), "hé");
        assert_eq!(truncate_for_log("short", 500), "short");
    }
}
