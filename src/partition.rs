// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Equal-length partitioning of a half-day span.
//!
//! A [`Partition`] splits `[start, end)` into `N` contiguous segments of
//! length `L = (end − start) / N` microseconds (real-valued).  Boundary `k`
//! is placed at `start + round(k · L)`, computed independently for every
//! `k` rather than by repeated addition, so any segment can be queried on
//! its own and still agree exactly with its neighbours:
//!
//! ```text
//! start                                                         end
//!   |--- 0 ---|--- 1 ---|--- 2 ---| ... |--- N-2 ---|--- N-1 ---|
//!   b(0)      b(1)      b(2)            b(N-2)      b(N-1)      b(N) = end
//! ```
//!
//! Locating an instant uses `floor(elapsed / L)` clamped to `[0, N)`, then
//! checks the result against the rounded boundaries so the reported
//! segment always contains the instant whenever the instant lies inside
//! the span.

use crate::error::{PeriodError, PeriodResult};
use crate::instant::{micros_between, offset_micros, Instant};
use crate::period::{Interval, Segment};

/// A half-day span divided into `count` equal segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    span: Interval,
    count: usize,
    segment_micros: f64,
}

impl Partition {
    /// Partition `span` into `count` segments.
    ///
    /// Fails with [`PeriodError::InvalidSpan`] when `span.start >= span.end`
    /// and with [`PeriodError::InvalidSegmentCount`] when `count == 0`.
    pub fn new(span: Interval, count: usize) -> PeriodResult<Self> {
        if count == 0 {
            return Err(PeriodError::InvalidSegmentCount);
        }
        let span = Interval::try_new(span.start, span.end)?;
        let segment_micros = span.duration_micros() as f64 / count as f64;
        Ok(Self {
            span,
            count,
            segment_micros,
        })
    }

    pub fn span(&self) -> Interval {
        self.span
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Real-valued segment length in microseconds.
    pub fn segment_micros(&self) -> f64 {
        self.segment_micros
    }

    /// Boundary `k` for `k` in `0..=count`; `k >= count` yields the span end.
    fn boundary(&self, k: usize) -> Instant {
        if k == 0 {
            self.span.start
        } else if k >= self.count {
            self.span.end
        } else {
            let offset = (self.segment_micros * k as f64).round() as i64;
            offset_micros(self.span.start, offset)
        }
    }

    /// Bounds of segment `index`, clamped to the last segment.
    pub fn bounds(&self, index: usize) -> Interval {
        let index = index.min(self.count - 1);
        Interval::new(self.boundary(index), self.boundary(index + 1))
    }

    /// 0-based index of the segment containing `instant`.
    ///
    /// Instants before the span map to 0 and instants at or after its end
    /// map to `count - 1`; neither is an error.
    pub fn locate(&self, instant: Instant) -> usize {
        let elapsed = micros_between(self.span.start, instant) as f64;
        let raw = (elapsed / self.segment_micros).floor();
        let last = self.count - 1;

        let mut index = if raw <= 0.0 {
            0
        } else if raw >= last as f64 {
            last
        } else {
            raw as usize
        };

        // floor() works on truncated microseconds while the boundaries are
        // rounded; settle the off-by-one either way.
        if index > 0 && instant < self.boundary(index) {
            index -= 1;
        } else if index < last && instant >= self.boundary(index + 1) {
            index += 1;
        }
        index
    }

    /// The segment containing `instant`, tagged with the half-day phase.
    pub fn segment_at(&self, instant: Instant, is_daytime: bool) -> Segment {
        self.segment(self.locate(instant), is_daytime)
    }

    /// Segment `index` (clamped to the last one), tagged with the half-day phase.
    pub fn segment(&self, index: usize, is_daytime: bool) -> Segment {
        let index = index.min(self.count - 1);
        let bounds = self.bounds(index);
        Segment {
            index,
            start: bounds.start,
            end: bounds.end,
            is_daytime,
        }
    }

    /// All segments in ascending order.
    pub fn segments(&self, is_daytime: bool) -> impl Iterator<Item = Segment> + '_ {
        (0..self.count).map(move |index| self.segment(index, is_daytime))
    }
}

/// Locate `instant` within `[span_start, span_end)` split into `segment_count` parts.
///
/// Returns the 0-based index and the bounds of that segment.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunhours::locate;
///
/// let sunrise = Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap();
/// let sunset = Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();
/// let query = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
///
/// let (index, bounds) = locate(query, sunrise, sunset, 12).unwrap();
/// assert_eq!(index, 3);
/// assert_eq!(bounds.start, Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap());
/// ```
pub fn locate(
    instant: Instant,
    span_start: Instant,
    span_end: Instant,
    segment_count: usize,
) -> PeriodResult<(usize, Interval)> {
    let partition = Partition::new(Interval::new(span_start, span_end), segment_count)?;
    let index = partition.locate(instant);
    Ok((index, partition.bounds(index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use proptest::prelude::*;

    fn at(h: u32, m: u32) -> Instant {
        Utc.with_ymd_and_hms(2024, 3, 10, h, m, 0).unwrap()
    }

    fn twelve_hours() -> Partition {
        Partition::new(Interval::new(at(6, 0), at(18, 0)), 12).unwrap()
    }

    #[test]
    fn test_rejects_zero_count_and_empty_span() {
        let span = Interval::new(at(6, 0), at(18, 0));
        assert!(matches!(
            Partition::new(span, 0),
            Err(PeriodError::InvalidSegmentCount)
        ));
        assert!(matches!(
            Partition::new(Interval::new(at(6, 0), at(6, 0)), 12),
            Err(PeriodError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn test_accessors_report_the_partition() {
        let p = Partition::new(Interval::new(at(18, 0), at(6, 0) + TimeDelta::days(1)), 8).unwrap();
        assert_eq!(p.count(), 8);
        assert_eq!(p.span().duration(), TimeDelta::hours(12));
        assert!((p.segment_micros() - 5_400_000_000.0).abs() < 1e-3);
    }

    #[test]
    fn test_locate_mid_morning() {
        let p = twelve_hours();
        let index = p.locate(at(9, 30));
        assert_eq!(index, 3);
        assert_eq!(p.bounds(index), Interval::new(at(9, 0), at(10, 0)));
    }

    #[test]
    fn test_boundary_instants() {
        let p = twelve_hours();
        let last_us = at(18, 0) - TimeDelta::microseconds(1);

        assert_eq!(p.locate(at(6, 0)), 0);
        assert_eq!(p.locate(last_us), 11);
        assert_eq!(p.locate(at(18, 0)), 11);
        // Segment starts belong to their own segment.
        assert_eq!(p.locate(at(7, 0)), 1);
        assert_eq!(p.locate(at(7, 0) - TimeDelta::microseconds(1)), 0);
    }

    #[test]
    fn test_out_of_span_clamps() {
        let p = twelve_hours();
        assert_eq!(p.locate(at(5, 0)), 0);
        assert_eq!(p.locate(at(23, 0)), 11);
    }

    #[test]
    fn test_uneven_length_rounds_each_boundary() {
        // 10 hours + 7 µs into 12 parts: not a whole number of microseconds.
        let start = at(6, 0);
        let end = at(16, 0) + TimeDelta::microseconds(7);
        let p = Partition::new(Interval::new(start, end), 12).unwrap();

        let segments: Vec<_> = p.segments(true).collect();
        assert_eq!(segments.len(), 12);
        assert_eq!(segments[0].start, start);
        assert_eq!(segments[11].end, end);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for segment in &segments {
            assert_eq!(p.locate(segment.start), segment.index);
        }
    }

    #[test]
    fn test_free_locate_matches_partition() {
        let (index, bounds) = locate(at(17, 59), at(6, 0), at(18, 0), 8).unwrap();
        assert_eq!(index, 7);
        assert_eq!(bounds.end, at(18, 0));
        assert_eq!(bounds.start, at(16, 30));
    }

    proptest! {
        #[test]
        fn prop_segments_tile_the_span(
            span_us in 1_000i64..172_800_000_000i64,
            count in 1usize..=24,
        ) {
            let start = at(0, 0);
            let end = offset_micros(start, span_us);
            let p = Partition::new(Interval::new(start, end), count).unwrap();
            let segments: Vec<_> = p.segments(false).collect();

            prop_assert_eq!(segments.len(), count);
            prop_assert_eq!(segments[0].start, start);
            prop_assert_eq!(segments[count - 1].end, end);
            for (i, pair) in segments.windows(2).enumerate() {
                prop_assert_eq!(pair[0].end, pair[1].start);
                prop_assert_eq!(pair[0].index, i);
            }
        }

        #[test]
        fn prop_located_segment_contains_instant(
            span_us in 1_000i64..172_800_000_000i64,
            count in 1usize..=24,
            frac in 0.0f64..1.0,
        ) {
            let start = at(0, 0);
            let end = offset_micros(start, span_us);
            let p = Partition::new(Interval::new(start, end), count).unwrap();
            let instant = offset_micros(start, (span_us as f64 * frac) as i64);
            prop_assume!(instant < end);

            let segment = p.segment_at(instant, true);
            prop_assert!(segment.index < count);
            prop_assert!(segment.start <= instant && instant < segment.end);
        }
    }
}
