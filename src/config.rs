// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Engine configuration.

use chrono::{FixedOffset, Offset, TimeDelta, Utc};

/// Tunables shared by the day-window resolver and the period engines.
///
/// ```
/// use chrono::{FixedOffset, TimeDelta};
/// use sunhours::PeriodConfig;
///
/// let config = PeriodConfig::default()
///     .with_civil_offset(FixedOffset::east_opt(19_800).unwrap())
///     .with_fallback_span(TimeDelta::hours(24));
/// assert_eq!(config.civil_offset.local_minus_utc(), 19_800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodConfig {
    /// Offset on which civil dates and sunrise weekdays are read.
    ///
    /// Must match the calendar the provider labels its dates with.
    pub civil_offset: FixedOffset,

    /// Span assumed between a known boundary and an unavailable
    /// previous/next-day one.
    ///
    /// A heuristic: near the poles the real sunrise-to-sunrise interval can
    /// differ substantially from 24 hours, so segment lengths derived from
    /// the fallback are approximate.
    pub fallback_span: TimeDelta,
}

impl PeriodConfig {
    pub const DEFAULT_FALLBACK_HOURS: i64 = 24;

    pub fn with_civil_offset(mut self, offset: FixedOffset) -> Self {
        self.civil_offset = offset;
        self
    }

    /// Override the fallback span.
    ///
    /// A span that does not exceed a day's daylight is widened by the
    /// resolver so the estimated night is never empty.
    pub fn with_fallback_span(mut self, span: TimeDelta) -> Self {
        self.fallback_span = span;
        self
    }
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            civil_offset: Utc.fix(),
            fallback_span: TimeDelta::hours(Self::DEFAULT_FALLBACK_HOURS),
        }
    }
}
