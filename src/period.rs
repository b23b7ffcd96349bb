// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time spans, segments and labelled periods.
//!
//! This module provides:
//! - [`Interval`]: a half-open `[start, end)` span between two instants
//! - [`Segment`]: one of the N equal parts of a half-day span
//! - [`Period`]: a labelled segment, the result returned by the engines

use chrono::{TimeDelta, Weekday};
use qtty::Seconds;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PeriodError, PeriodResult};
use crate::instant::{micros_between, span_seconds, Instant};

/// Represents a half-open interval `[start, end)` between two instants.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunhours::Interval;
///
/// let sunrise = Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap();
/// let sunset = Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap();
/// let day = Interval::new(sunrise, sunset);
///
/// assert_eq!(day.duration().num_hours(), 12);
/// assert!(day.contains(sunrise));
/// assert!(!day.contains(sunset));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    pub start: Instant,
    pub end: Instant,
}

impl Interval {
    /// Creates a new interval between two instants.
    ///
    /// No ordering check is made; use [`Interval::try_new`] when the bounds
    /// come from untrusted input.
    pub fn new(start: Instant, end: Instant) -> Self {
        Interval { start, end }
    }

    /// Creates a new interval, rejecting empty or inverted bounds.
    pub fn try_new(start: Instant, end: Instant) -> PeriodResult<Self> {
        if start < end {
            Ok(Self::new(start, end))
        } else {
            Err(PeriodError::InvalidSpan { start, end })
        }
    }

    /// Returns the duration of the interval as the difference between end and start.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Duration in whole microseconds.
    pub fn duration_micros(&self) -> i64 {
        micros_between(self.start, self.end)
    }

    /// Duration as a typed quantity in seconds.
    pub fn duration_seconds(&self) -> Seconds {
        span_seconds(self.start, self.end)
    }

    /// `true` when `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// One of the N equal-length, contiguous parts of a half-day span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// 0-based position within the half-day.
    pub index: usize,
    pub start: Instant,
    pub end: Instant,
    /// `true` for the sunrise→sunset half, `false` for sunset→next sunrise.
    pub is_daytime: bool,
}

impl Segment {
    /// The segment bounds as an [`Interval`].
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn contains(&self, instant: Instant) -> bool {
        self.interval().contains(instant)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = if self.is_daytime { "day" } else { "night" };
        write!(f, "{} #{}: {}", phase, self.index + 1, self.interval())
    }
}

/// A labelled segment.
///
/// `L` is the ruler type of the period system: [`Planet`](crate::Planet)
/// for planetary hours, [`EightFoldType`](crate::EightFoldType) for the
/// eight-fold periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Period<L> {
    pub label: L,
    pub segment: Segment,
    /// Weekday of the sunrise anchoring the astronomical day.
    pub weekday: Weekday,
}

impl<L: Copy> Period<L> {
    pub fn label(&self) -> L {
        self.label
    }

    pub fn start(&self) -> Instant {
        self.segment.start
    }

    pub fn end(&self) -> Instant {
        self.segment.end
    }

    /// 1-based position within the half-day.
    pub fn ordinal(&self) -> usize {
        self.segment.index + 1
    }

    pub fn is_daytime(&self) -> bool {
        self.segment.is_daytime
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Length of the period as a typed quantity in seconds.
    pub fn duration(&self) -> Seconds {
        self.segment.interval().duration_seconds()
    }

    pub fn contains(&self, instant: Instant) -> bool {
        self.segment.contains(instant)
    }
}

impl<L: fmt::Display> fmt::Display for Period<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.segment)
    }
}
