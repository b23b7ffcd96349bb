// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise-anchored sub-day periods.
//!
//! This crate splits an astronomical day (sunrise to next sunrise) into
//! named, time-bounded periods used in traditional time-keeping:
//!
//! - **Planetary hours** — 12 day + 12 night periods ruled by the
//!   Chaldean planetary rotation starting from the weekday's ruler.
//! - **Eight-fold periods** (Choghadiya) — 8 day + 8 night periods whose
//!   types come from a fixed per-weekday table.
//!
//! Sunrise and sunset are supplied by an [`AstronomicalEventProvider`];
//! this crate only resolves which day an instant belongs to, partitions
//! the half-day spans and labels the segments.
//!
//! # Core types
//!
//! - [`PeriodEngine<S, P>`] — period queries for system `S` over provider `P`.
//! - [`PeriodSystem`] — marker trait implemented by [`PlanetaryHours`] and [`EightFold`].
//! - [`DayWindowResolver`] — day-window resolution with previous-day rollover.
//! - [`Partition`] — equal-length segmentation of a half-day span.
//! - [`Period<L>`] — a labelled [`Segment`].
//!
//! # Day boundaries
//!
//! An instant earlier than the sunrise of its own civil date belongs to
//! the previous civil date's astronomical day.  Missing data for the
//! instant's own date is an error ([`PeriodError::MissingAstronomicalData`]);
//! missing data for the neighbouring dates is replaced by a 24-hour
//! estimate (see [`PeriodConfig::fallback_span`]), which is inaccurate at
//! polar latitudes.

mod config;
mod day_window;
mod eight_fold;
mod engine;
mod error;
pub(crate) mod instant;
mod partition;
mod period;
mod planet;
mod provider;
mod system;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use config::PeriodConfig;
pub use day_window::{DayWindow, DayWindowResolver};
pub use eight_fold::{
    eight_fold_sequence, eight_fold_type, EightFoldType, Quality, DAY_TABLE, NIGHT_TABLE,
    PERIODS_PER_HALF_DAY,
};
pub use engine::{
    current_eight_fold_period, current_planetary_hour, eight_fold_periods_for_day,
    planetary_hours_for_day, EightFoldEngine, EightFoldPeriod, PeriodEngine, PlanetaryHour,
    PlanetaryHourEngine,
};
pub use error::{Boundary, PeriodError, PeriodResult};
pub use instant::{civil_date, civil_weekday, micros_between, offset_micros, Instant};
pub use partition::{locate, Partition};
pub use period::{Interval, Period, Segment};
pub use planet::{planetary_hour_ruler, Planet, CHALDEAN_ORDER, HOURS_PER_HALF_DAY, NIGHT_OFFSET};
pub use provider::{
    AstronomicalEventProvider, GeoLocation, InMemoryProvider, ProviderError, SunriseSunset,
};
pub use system::{EightFold, PeriodSystem, PlanetaryHours};
