//! Dashboard aggregation
//!
//! Pure time-bucketing over the append-only ledgers. Handlers fetch the
//! raw rows once per request; everything here is deterministic given a
//! fixed `now` and the business timezone, so day and hour boundaries do
//! not depend on the host clock or host zone.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate, Timelike};
use chrono_tz::Tz;
use serde::Serialize;

use crate::db::models::{Checkin, Transaction};
use crate::utils::time;

/// One calendar-day bucket of the revenue/check-in series
#[derive(Debug, Clone, Serialize)]
pub struct DailyPoint {
    pub day: String,
    pub revenue: i64,
    pub checkins: i64,
}

/// One hour-of-day bucket of the attendance histogram
#[derive(Debug, Clone, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub count: i64,
}

/// Revenue and check-in counts for the last `days` calendar days,
/// inclusive of today, oldest first. Days without activity are zero-filled
/// so the series always has exactly `days` entries.
pub fn daily_series(
    transactions: &[Transaction],
    checkins: &[Checkin],
    days: u32,
    now: i64,
    tz: Tz,
) -> Vec<DailyPoint> {
    let today = time::local_date(now, tz);

    let mut revenue: HashMap<NaiveDate, i64> = HashMap::new();
    for t in transactions {
        *revenue
            .entry(time::local_date(t.transaction_date, tz))
            .or_default() += t.amount;
    }

    let mut counts: HashMap<NaiveDate, i64> = HashMap::new();
    for c in checkins {
        *counts
            .entry(time::local_date(c.check_in_time, tz))
            .or_default() += 1;
    }

    (0..days)
        .rev()
        .map(|i| {
            let date = today - Duration::days(i as i64);
            DailyPoint {
                day: day_label(date, days),
                revenue: revenue.get(&date).copied().unwrap_or(0),
                checkins: counts.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Short weekday labels for the weekly chart, "Jan 5"-style for longer ranges
fn day_label(date: NaiveDate, days: u32) -> String {
    if days > 7 {
        date.format("%b %-d").to_string()
    } else {
        date.format("%a").to_string()
    }
}

/// Check-ins from the last `lookback_days` days bucketed by local
/// hour-of-day, ascending. Hours with no check-ins are omitted.
pub fn busiest_hours(checkins: &[Checkin], now: i64, lookback_days: i64, tz: Tz) -> Vec<HourBucket> {
    let cutoff = now - lookback_days * time::DAY_MILLIS;

    let mut buckets: BTreeMap<u32, i64> = BTreeMap::new();
    for c in checkins {
        if c.check_in_time >= cutoff {
            let hour = time::to_zoned(c.check_in_time, tz).hour();
            *buckets.entry(hour).or_default() += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(hour, count)| HourBucket { hour, count })
        .collect()
}

/// Sum of transaction amounts with `transaction_date` in `[start, end)`
pub fn sum_in_range(transactions: &[Transaction], start: i64, end: i64) -> i64 {
    transactions
        .iter()
        .filter(|t| t.transaction_date >= start && t.transaction_date < end)
        .map(|t| t.amount)
        .sum()
}

/// Number of check-ins with `check_in_time` in `[start, end)`
pub fn count_in_range(checkins: &[Checkin], start: i64, end: i64) -> i64 {
    checkins
        .iter()
        .filter(|c| c.check_in_time >= start && c.check_in_time < end)
        .count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const JAKARTA: Tz = chrono_tz::Asia::Jakarta;

    fn jakarta_millis(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
            .and_local_timezone(JAKARTA)
            .single()
            .unwrap()
            .timestamp_millis()
    }

    fn tx(at: i64, amount: i64) -> Transaction {
        Transaction {
            id: None,
            member: "member:a".parse().unwrap(),
            member_name: "Budi".to_string(),
            plan_name: "Basic (1 Month)".to_string(),
            amount,
            transaction_date: at,
        }
    }

    fn checkin(at: i64) -> Checkin {
        Checkin {
            id: None,
            member: "member:a".parse().unwrap(),
            member_name: "Budi".to_string(),
            check_in_time: at,
        }
    }

    #[test]
    fn empty_series_is_zero_filled() {
        let now = jakarta_millis(2024, 1, 16, 12, 0);
        let weekly = daily_series(&[], &[], 7, now, JAKARTA);
        assert_eq!(weekly.len(), 7);
        assert!(weekly.iter().all(|p| p.revenue == 0 && p.checkins == 0));

        let monthly = daily_series(&[], &[], 30, now, JAKARTA);
        assert_eq!(monthly.len(), 30);
    }

    #[test]
    fn series_totals_match_the_raw_window() {
        let now = jakarta_millis(2024, 1, 20, 18, 0);
        // One transaction per day for ten days ending today
        let transactions: Vec<Transaction> = (0..10)
            .map(|i| tx(now - i * 24 * 60 * 60 * 1000, 25_000))
            .collect();

        let weekly = daily_series(&transactions, &[], 7, now, JAKARTA);
        let series_total: i64 = weekly.iter().map(|p| p.revenue).sum();

        let window_start = time::day_start_millis(
            time::local_date(now, JAKARTA) - Duration::days(6),
            JAKARTA,
        );
        let window_end = time::day_end_millis(time::local_date(now, JAKARTA), JAKARTA);
        assert_eq!(
            series_total,
            sum_in_range(&transactions, window_start, window_end)
        );
        assert_eq!(series_total, 7 * 25_000);
    }

    #[test]
    fn day_buckets_follow_the_business_timezone() {
        // 06:30 Jakarta on the 16th is still the 15th in UTC
        let now = jakarta_millis(2024, 1, 16, 12, 0);
        let early = tx(jakarta_millis(2024, 1, 16, 6, 30), 40_000);

        let weekly = daily_series(&[early], &[], 7, now, JAKARTA);
        assert_eq!(weekly.last().unwrap().revenue, 40_000);
        assert_eq!(weekly[weekly.len() - 2].revenue, 0);
    }

    #[test]
    fn series_is_oldest_first_with_expected_labels() {
        // 2024-01-16 is a Tuesday
        let now = jakarta_millis(2024, 1, 16, 12, 0);
        let weekly = daily_series(&[], &[], 7, now, JAKARTA);
        assert_eq!(weekly.first().unwrap().day, "Wed");
        assert_eq!(weekly.last().unwrap().day, "Tue");

        let monthly = daily_series(&[], &[], 30, now, JAKARTA);
        assert_eq!(monthly.last().unwrap().day, "Jan 16");
    }

    #[test]
    fn busiest_hours_sorts_and_omits_empty_buckets() {
        let now = jakarta_millis(2024, 2, 1, 12, 0);
        let checkins = vec![
            checkin(jakarta_millis(2024, 1, 30, 19, 15)),
            checkin(jakarta_millis(2024, 1, 29, 7, 5)),
            checkin(jakarta_millis(2024, 1, 28, 7, 45)),
            // Older than the 30-day lookback
            checkin(jakarta_millis(2023, 12, 1, 7, 0)),
        ];

        let hours = busiest_hours(&checkins, now, 30, JAKARTA);
        assert_eq!(hours.len(), 2);
        assert_eq!((hours[0].hour, hours[0].count), (7, 2));
        assert_eq!((hours[1].hour, hours[1].count), (19, 1));
    }

    #[test]
    fn hour_buckets_use_local_hours() {
        // 23:30 Jakarta is 16:30 UTC; the histogram must say hour 23
        let now = jakarta_millis(2024, 1, 16, 12, 0);
        let late = checkin(jakarta_millis(2024, 1, 15, 23, 30));
        let hours = busiest_hours(&[late], now, 30, JAKARTA);
        assert_eq!((hours[0].hour, hours[0].count), (23, 1));
    }

    #[test]
    fn range_counters_are_half_open() {
        let start = jakarta_millis(2024, 1, 15, 0, 0);
        let end = jakarta_millis(2024, 1, 16, 0, 0);
        let rows = vec![checkin(start), checkin(end - 1), checkin(end)];
        assert_eq!(count_in_range(&rows, start, end), 2);
    }
}
