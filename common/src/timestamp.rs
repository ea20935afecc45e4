//! 日時の解析・表示
//!
//! バックエンドの `LocalDateTime` は文字列 (`2024-03-01T10:15:30.123`) でも
//! 配列 (`[2024,3,1,10,15,30]`) でも届くため、どちらも文字列に正規化して保持する。

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 日時文字列を解析（タイムゾーン付きは現地時刻として扱う）
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Jackson配列形式 `[y, m, d, h, min, s, nanos]` を日時に変換
pub fn from_parts(parts: &[i64]) -> Option<NaiveDateTime> {
    if parts.len() < 3 {
        return None;
    }
    let field = |idx: usize| u32::try_from(parts.get(idx).copied().unwrap_or(0)).ok();

    let year = i32::try_from(parts[0]).ok()?;
    let date = NaiveDate::from_ymd_opt(year, field(1)?, field(2)?)?;
    date.and_hms_nano_opt(field(3)?, field(4)?, field(5)?, field(6)?)
}

/// UNIXミリ秒から日時に変換（WASM側で `Date.now()` を渡す用途）
pub fn from_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// `Mar 6, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Mar 6, 2024, 02:05 PM`
pub fn format_date_time(dt: NaiveDateTime) -> String {
    dt.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// serde用: 文字列/配列/null を `Option<String>` に正規化
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(normalize))
}

fn normalize(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(parts) => {
            let nums: Vec<i64> = parts.iter().filter_map(Value::as_i64).collect();
            from_parts(&nums).map(|dt| dt.format(WIRE_FORMAT).to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_local_date_time() {
        let dt = parse_timestamp("2024-03-01T10:15:30").unwrap();
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = parse_timestamp("2024-03-01T10:15:30.123456").unwrap();
        assert_eq!(dt.second(), 30);
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        let dt = parse_timestamp("2024-03-01T10:15:30+05:30").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_date_only() {
        let dt = parse_timestamp("2024-03-01").unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_from_parts() {
        let dt = from_parts(&[2024, 3, 1, 10, 15]).unwrap();
        assert_eq!(dt.minute(), 15);
        assert!(from_parts(&[2024, 13, 1]).is_none());
        assert!(from_parts(&[2024]).is_none());
    }

    #[test]
    fn test_from_parts_rejects_out_of_range() {
        // i32に収まらない年は切り詰めずに無効
        assert!(from_parts(&[(1_i64 << 32) + 2024, 3, 1]).is_none());
        assert!(from_parts(&[2024, (1_i64 << 32) + 3, 1]).is_none());
        assert!(from_parts(&[2024, 3, 1, -1, 0, 0]).is_none());
        assert!(from_parts(&[2024, 3, 1, 10, 0, 0, 0]).is_some());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!(format_date(date), "Mar 6, 2024");
    }

    #[test]
    fn test_format_date_time() {
        let dt = parse_timestamp("2024-03-06T14:05:00").unwrap();
        assert_eq!(format_date_time(dt), "Mar 6, 2024, 02:05 PM");
    }

    #[test]
    fn test_normalize_array_form() {
        let value = serde_json::json!([2024, 3, 1, 9, 0, 0]);
        assert_eq!(normalize(&value).as_deref(), Some("2024-03-01T09:00:00"));
        assert_eq!(normalize(&Value::Null), None);
    }
}
