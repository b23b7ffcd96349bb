// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Eight-fold day periods (Choghadiya).
//!
//! Daytime and nighttime are each split into eight equal periods.  The
//! type of every period is read from a fixed per-weekday table; the
//! weekday is the one on which the anchoring sunrise falls.

use chrono::Weekday;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::planet::Planet;

/// Kind of an eight-fold period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EightFoldType {
    Udveg,
    Char,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
}

/// Traditional auspiciousness of a period type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quality {
    Auspicious,
    Neutral,
    Inauspicious,
}

impl EightFoldType {
    pub const fn quality(self) -> Quality {
        match self {
            EightFoldType::Amrit | EightFoldType::Shubh | EightFoldType::Labh => {
                Quality::Auspicious
            }
            EightFoldType::Char => Quality::Neutral,
            EightFoldType::Udveg | EightFoldType::Kaal | EightFoldType::Rog => {
                Quality::Inauspicious
            }
        }
    }

    /// Planet traditionally presiding over this period type.
    pub const fn ruler(self) -> Planet {
        match self {
            EightFoldType::Udveg => Planet::Sun,
            EightFoldType::Char => Planet::Venus,
            EightFoldType::Labh => Planet::Mercury,
            EightFoldType::Amrit => Planet::Moon,
            EightFoldType::Kaal => Planet::Saturn,
            EightFoldType::Shubh => Planet::Jupiter,
            EightFoldType::Rog => Planet::Mars,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            EightFoldType::Udveg => "Udveg",
            EightFoldType::Char => "Char",
            EightFoldType::Labh => "Labh",
            EightFoldType::Amrit => "Amrit",
            EightFoldType::Kaal => "Kaal",
            EightFoldType::Shubh => "Shubh",
            EightFoldType::Rog => "Rog",
        }
    }
}

impl fmt::Display for EightFoldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Periods per half-day.
pub const PERIODS_PER_HALF_DAY: usize = 8;

use EightFoldType::{Amrit, Char, Kaal, Labh, Rog, Shubh, Udveg};

/// Daytime sequences, indexed by `Weekday::num_days_from_sunday()`.
pub const DAY_TABLE: [[EightFoldType; PERIODS_PER_HALF_DAY]; 7] = [
    [Udveg, Char, Labh, Amrit, Kaal, Shubh, Rog, Udveg], // Sunday
    [Amrit, Kaal, Shubh, Rog, Udveg, Char, Labh, Amrit], // Monday
    [Rog, Udveg, Char, Labh, Amrit, Kaal, Shubh, Rog],   // Tuesday
    [Labh, Amrit, Kaal, Shubh, Rog, Udveg, Char, Labh],  // Wednesday
    [Shubh, Rog, Udveg, Char, Labh, Amrit, Kaal, Shubh], // Thursday
    [Char, Labh, Amrit, Kaal, Shubh, Rog, Udveg, Char],  // Friday
    [Kaal, Shubh, Rog, Udveg, Char, Labh, Amrit, Kaal],  // Saturday
];

/// Nighttime sequences, indexed by `Weekday::num_days_from_sunday()`.
pub const NIGHT_TABLE: [[EightFoldType; PERIODS_PER_HALF_DAY]; 7] = [
    [Shubh, Amrit, Char, Rog, Kaal, Labh, Udveg, Shubh], // Sunday
    [Char, Rog, Kaal, Labh, Udveg, Shubh, Amrit, Char],  // Monday
    [Kaal, Labh, Udveg, Shubh, Amrit, Char, Rog, Kaal],  // Tuesday
    [Udveg, Shubh, Amrit, Char, Rog, Kaal, Labh, Udveg], // Wednesday
    [Amrit, Char, Rog, Kaal, Labh, Udveg, Shubh, Amrit], // Thursday
    [Rog, Kaal, Labh, Udveg, Shubh, Amrit, Char, Rog],   // Friday
    [Labh, Udveg, Shubh, Amrit, Char, Rog, Kaal, Labh],  // Saturday
];

/// The full daytime or nighttime sequence for `weekday`.
pub fn eight_fold_sequence(
    weekday: Weekday,
    is_daytime: bool,
) -> &'static [EightFoldType; PERIODS_PER_HALF_DAY] {
    let row = weekday.num_days_from_sunday() as usize;
    if is_daytime {
        &DAY_TABLE[row]
    } else {
        &NIGHT_TABLE[row]
    }
}

/// Type of eight-fold period `index` (0-based, clamped to 7) for a day
/// anchored at a sunrise falling on `weekday`.
pub fn eight_fold_type(weekday: Weekday, index: usize, is_daytime: bool) -> EightFoldType {
    eight_fold_sequence(weekday, is_daytime)[index.min(PERIODS_PER_HALF_DAY - 1)]
}
