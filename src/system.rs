// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Period-system marker types.
//!
//! Each zero-sized marker fixes how many segments a half-day is split
//! into and how a segment is labelled:
//!
//! | Marker | Segments per half-day | Label |
//! |--------|-----------------------|-------|
//! | [`PlanetaryHours`] | 12 | [`Planet`], Chaldean rotation from the day ruler |
//! | [`EightFold`] | 8 | [`EightFoldType`], per-weekday table |

use chrono::Weekday;

use crate::eight_fold::{eight_fold_type, EightFoldType, PERIODS_PER_HALF_DAY};
use crate::planet::{planetary_hour_ruler, Planet, HOURS_PER_HALF_DAY};

/// Marker trait for period systems.
///
/// The weekday handed to [`PeriodSystem::label`] is always the weekday of
/// the sunrise that anchors the astronomical day, never the weekday of the
/// query instant.
pub trait PeriodSystem: Copy + Clone + std::fmt::Debug + 'static {
    /// Ruler type attached to each segment.
    type Label: Copy + std::fmt::Debug + PartialEq;

    /// Display label used in logs.
    const NAME: &'static str;

    /// Segments per half-day.
    const SEGMENTS: usize;

    /// Label of segment `index` (0-based) in the given half-day.
    fn label(weekday: Weekday, index: usize, is_daytime: bool) -> Self::Label;
}

/// Planetary hours: 12 day + 12 night, Chaldean rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlanetaryHours;

impl PeriodSystem for PlanetaryHours {
    type Label = Planet;
    const NAME: &'static str = "planetary hours";
    const SEGMENTS: usize = HOURS_PER_HALF_DAY;

    #[inline]
    fn label(weekday: Weekday, index: usize, is_daytime: bool) -> Planet {
        planetary_hour_ruler(weekday, index, is_daytime)
    }
}

/// Eight-fold periods: 8 day + 8 night, per-weekday table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EightFold;

impl PeriodSystem for EightFold {
    type Label = EightFoldType;
    const NAME: &'static str = "eight-fold periods";
    const SEGMENTS: usize = PERIODS_PER_HALF_DAY;

    #[inline]
    fn label(weekday: Weekday, index: usize, is_daytime: bool) -> EightFoldType {
        eight_fold_type(weekday, index, is_daytime)
    }
}
