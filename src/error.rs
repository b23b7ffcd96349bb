// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for period computations.

use chrono::NaiveDate;
use std::fmt;

use crate::instant::Instant;
use crate::provider::ProviderError;

/// Result type for period computations.
pub type PeriodResult<T> = Result<T, PeriodError>;

/// Which sunrise/sunset boundary the provider failed to supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Sunrise,
    Sunset,
    Both,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Boundary::Sunrise => "sunrise",
            Boundary::Sunset => "sunset",
            Boundary::Both => "sunrise and sunset",
        };
        f.write_str(name)
    }
}

/// Error type for period computations.
///
/// Only failures on the *primary* day of a query are surfaced here.
/// Auxiliary previous/next-day lookups never fail a query; they fall back
/// to [`PeriodConfig::fallback_span`](crate::PeriodConfig::fallback_span).
#[derive(Debug, thiserror::Error)]
pub enum PeriodError {
    #[error("missing astronomical data for {date}: no {missing}")]
    MissingAstronomicalData { date: NaiveDate, missing: Boundary },

    #[error("invalid day window for {date}: sunrise {sunrise} is not before sunset {sunset}")]
    InvalidDayWindow {
        date: NaiveDate,
        sunrise: Instant,
        sunset: Instant,
    },

    #[error("astronomical event provider failed for {date}: {source}")]
    Provider {
        date: NaiveDate,
        #[source]
        source: ProviderError,
    },

    #[error("invalid span: start {start} is not before end {end}")]
    InvalidSpan { start: Instant, end: Instant },

    #[error("segment count must be positive")]
    InvalidSegmentCount,
}
