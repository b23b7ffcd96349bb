// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants, civil dates and microsecond arithmetic.
//!
//! Every query instant and every sunrise/sunset handled by this crate is a
//! [`chrono::DateTime<Utc>`].  Span arithmetic is carried out in whole
//! **microseconds** (`i64`) so that dividing a half-day into equal segments
//! and multiplying back never accumulates floating-point error across
//! successive boundaries.
//!
//! The *civil date* of an instant (the calendar label the provider is asked
//! about) and the *weekday* of a sunrise are read on a fixed civil offset.
//! With the default offset (UTC) they are simply the UTC calendar date and
//! weekday.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeDelta, Utc, Weekday};
use qtty::{Microseconds, Second, Seconds};

/// An absolute point in time.
pub type Instant = DateTime<Utc>;

/// Signed number of microseconds from `start` to `end`.
///
/// Saturates at the `i64` limits, which are only reachable for spans of
/// hundreds of thousands of years.
#[inline]
pub fn micros_between(start: Instant, end: Instant) -> i64 {
    match end.signed_duration_since(start).num_microseconds() {
        Some(us) => us,
        None if end >= start => i64::MAX,
        None => i64::MIN,
    }
}

/// `instant` shifted by `micros` microseconds.
#[inline]
pub fn offset_micros(instant: Instant, micros: i64) -> Instant {
    instant + TimeDelta::microseconds(micros)
}

/// Calendar date of `instant` on the given civil offset.
#[inline]
pub fn civil_date(instant: Instant, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

/// Weekday of `instant` on the given civil offset.
#[inline]
pub fn civil_weekday(instant: Instant, offset: FixedOffset) -> Weekday {
    instant.with_timezone(&offset).weekday()
}

/// Length of `[start, end)` as a typed quantity in seconds.
pub fn span_seconds(start: Instant, end: Instant) -> Seconds {
    Microseconds::new(micros_between(start, end) as f64).to::<Second>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> Instant {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_micros_between_signed() {
        let a = utc(2024, 3, 10, 6, 0);
        let b = utc(2024, 3, 10, 18, 0);
        assert_eq!(micros_between(a, b), 12 * 3_600 * 1_000_000);
        assert_eq!(micros_between(b, a), -12 * 3_600 * 1_000_000);
        assert_eq!(micros_between(a, a), 0);
    }

    #[test]
    fn test_offset_micros_inverts_micros_between() {
        let a = utc(2024, 3, 10, 6, 0);
        let b = utc(2024, 3, 11, 5, 47);
        assert_eq!(offset_micros(a, micros_between(a, b)), b);
    }

    #[test]
    fn test_civil_date_on_offset() {
        // 22:30 UTC is already the next day at UTC+05:30.
        let t = utc(2024, 3, 10, 22, 30);
        let ist = FixedOffset::east_opt(5 * 3_600 + 1_800).unwrap();
        assert_eq!(
            civil_date(t, ist),
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
        assert_eq!(
            civil_date(t, FixedOffset::east_opt(0).unwrap()),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert_eq!(civil_weekday(t, ist), Weekday::Mon);
    }

    #[test]
    fn test_span_seconds() {
        let a = utc(2024, 3, 10, 6, 0);
        let b = utc(2024, 3, 10, 7, 30);
        assert!((span_seconds(a, b).value() - 5_400.0).abs() < 1e-9);
    }
}
