//! ブラウザの現在時刻

use chrono::{Duration, NaiveDateTime};
use vividhands_common::timestamp::from_millis;

/// 現在のローカル時刻（注文日時はバックエンドのローカル時刻なので揃える）
pub fn now() -> NaiveDateTime {
    let date = js_sys::Date::new_0();
    let utc = from_millis(date.get_time() as i64).unwrap_or_default();
    // getTimezoneOffsetは UTC - ローカル（分）
    utc - Duration::minutes(date.get_timezone_offset() as i64)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use chrono::NaiveDate;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_now_is_local_wall_clock() {
        let date = js_sys::Date::new_0();
        let local = now();
        let expected = NaiveDate::from_ymd_opt(date.get_full_year() as i32, date.get_month() + 1, date.get_date())
            .and_then(|d| d.and_hms_opt(date.get_hours(), date.get_minutes(), 0))
            .unwrap();

        // 期待値は秒を切り捨てているので差は0以上
        let diff = (local - expected).num_seconds();
        assert!((0..120).contains(&diff), "clock off by {} seconds", diff);
    }
}
