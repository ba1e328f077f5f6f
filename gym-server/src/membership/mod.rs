//! Membership lifecycle engine
//!
//! Pure window arithmetic for registrations and renewals. Everything takes
//! the current instant and the business timezone explicitly so handlers
//! pass the ambient clock exactly once and tests pin it.
//!
//! Window rules:
//! - duration 0 (single-visit pass): the window is the remainder of the
//!   purchase day, ending 23:59:59.999 local. Renewing a single-visit pass
//!   is always "today only" — it never rolls over a prior window.
//! - duration N >= 1: the window is N calendar months. Renewing while
//!   still active extends from the current end date (no time lost);
//!   renewing after expiry restarts from now.
//!
//! Month addition keeps the wall-clock time and the day-of-month, clamped
//! to the last day of the target month (Jan 31 + 1 month = Feb 29 in a
//! leap year).

use chrono::Months;
use chrono_tz::Tz;

use crate::utils::time;

/// Computed membership window, inclusive start / exclusive end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipWindow {
    pub start: i64,
    pub end: i64,
}

/// Window for a fresh registration starting now
pub fn registration_window(duration_months: i64, now: i64, tz: Tz) -> MembershipWindow {
    MembershipWindow {
        start: now,
        end: window_end(duration_months, now, tz),
    }
}

/// Window for a renewal given the member's current end date
pub fn renewal_window(
    duration_months: i64,
    current_end: i64,
    now: i64,
    tz: Tz,
) -> MembershipWindow {
    if duration_months == 0 {
        // Single-visit passes ignore the prior window entirely
        registration_window(0, now, tz)
    } else {
        let start = now.max(current_end);
        MembershipWindow {
            start,
            end: window_end(duration_months, start, tz),
        }
    }
}

fn window_end(duration_months: i64, start: i64, tz: Tz) -> i64 {
    if duration_months == 0 {
        time::end_of_day_millis(time::local_date(start, tz), tz)
    } else {
        let months = u32::try_from(duration_months).unwrap_or(0);
        add_calendar_months(start, months, tz)
    }
}

/// Add whole calendar months in the business timezone, clamping the
/// day-of-month at month-end boundaries. DST gap fallback to UTC, as in
/// the day-boundary helpers.
pub fn add_calendar_months(start: i64, months: u32, tz: Tz) -> i64 {
    let naive = time::to_zoned(start, tz).naive_local();
    let shifted = naive
        .checked_add_months(Months::new(months))
        .unwrap_or(naive);
    shifted
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| shifted.and_utc().timestamp_millis())
}
