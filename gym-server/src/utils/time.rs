//! Time helpers — business timezone conversion
//!
//! All calendar arithmetic (day boundaries, membership windows, chart
//! buckets) happens in the configured business timezone. The repository
//! layer only ever sees `i64` Unix millis.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Milliseconds per day
pub const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert Unix millis to a zoned datetime in the business timezone
pub fn to_zoned(millis: i64, tz: Tz) -> DateTime<Tz> {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .with_timezone(&tz)
}

/// Calendar date (business timezone) containing the given instant
pub fn local_date(millis: i64, tz: Tz) -> NaiveDate {
    to_zoned(millis, tz).date_naive()
}

/// Date + hour/min/sec/milli -> Unix millis (business timezone)
///
/// DST gap fallback: if the local time does not exist, fall back to UTC.
pub fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, milli: u32, tz: Tz) -> i64 {
    let naive = date.and_hms_milli_opt(hour, min, sec, milli).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of the calendar day (00:00:00.000) -> Unix millis (business timezone)
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 0, 0, 0, 0, tz)
}

/// End of the calendar day -> next day 00:00:00.000 Unix millis
///
/// Callers use `< end` (exclusive) semantics.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_hms_to_millis(next_day, 0, 0, 0, 0, tz)
}

/// Last representable instant of the calendar day (23:59:59.999)
pub fn end_of_day_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 23, 59, 59, 999, tz)
}

/// Parse a timezone name, falling back to UTC with a warning
pub fn parse_timezone(name: &str) -> Tz {
    name.parse().unwrap_or_else(|_| {
        tracing::warn!("Unknown timezone '{}', falling back to UTC", name);
        Tz::UTC
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAKARTA: Tz = chrono_tz::Asia::Jakarta;

    #[test]
    fn day_boundaries_follow_business_timezone() {
        // 2024-03-10 01:30 Jakarta is 2024-03-09 18:30 UTC
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let early = date_hms_to_millis(date, 1, 30, 0, 0, JAKARTA);
        assert_eq!(local_date(early, JAKARTA), date);

        let start = day_start_millis(date, JAKARTA);
        let end = day_end_millis(date, JAKARTA);
        assert!(start <= early && early < end);
        assert_eq!(end - start, 24 * 60 * 60 * 1000);
    }

    #[test]
    fn end_of_day_is_last_millisecond() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let eod = end_of_day_millis(date, JAKARTA);
        assert_eq!(eod + 1, day_end_millis(date, JAKARTA));
    }

    #[test]
    fn parse_timezone_falls_back_to_utc() {
        assert_eq!(parse_timezone("Asia/Jakarta"), JAKARTA);
        assert_eq!(parse_timezone("Not/AZone"), Tz::UTC);
    }
}
