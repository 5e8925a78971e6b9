//! 日付の判定関数
//!
//! 返却期限や延長後の日付をテストやログで確認するための述語。

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// 指定した曜日か
pub fn falls_on(date: DateTime<Utc>, weekday: Weekday) -> bool {
    date.weekday() == weekday
}

/// 月曜日か
pub fn falls_on_monday(date: DateTime<Utc>) -> bool {
    falls_on(date, Weekday::Mon)
}

/// 同じ日付か（時刻は無視）
pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// `today` から `days` 日後の日付か
pub fn is_days_from(date: DateTime<Utc>, today: DateTime<Utc>, days: i64) -> bool {
    is_same_day(date, today + Duration::days(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_falls_on() {
        let saturday = Utc.with_ymd_and_hms(2017, 4, 29, 0, 0, 0).unwrap();
        assert!(falls_on(saturday, Weekday::Sat));
        assert!(!falls_on_monday(saturday));
        assert!(falls_on_monday(saturday + Duration::days(2)));
    }

    #[test]
    fn test_is_same_day_ignores_time() {
        let morning = Utc.with_ymd_and_hms(2017, 4, 28, 8, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2017, 4, 28, 22, 30, 0).unwrap();
        assert!(is_same_day(morning, evening));
        assert!(!is_same_day(morning, evening + Duration::hours(2)));
    }

    #[test]
    fn test_is_days_from() {
        let today = Utc.with_ymd_and_hms(2017, 4, 28, 12, 0, 0).unwrap();
        assert!(is_days_from(today, today, 0));
        assert!(is_days_from(today + Duration::days(3), today, 3));
        assert!(!is_days_from(today + Duration::days(2), today, 3));
    }
}
