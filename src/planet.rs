// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Classical planets and the planetary-hour rotation.
//!
//! Planetary hours cycle through the seven classical planets in the
//! Chaldean order, slowest to fastest apparent motion:
//!
//! | Position | Planet |
//! |----------|--------|
//! | 0 | Saturn |
//! | 1 | Jupiter |
//! | 2 | Mars |
//! | 3 | Sun |
//! | 4 | Venus |
//! | 5 | Mercury |
//! | 6 | Moon |
//!
//! The first daytime hour of each weekday is ruled by that weekday's
//! planet (Sunday → Sun, Monday → Moon, …) and every following hour
//! advances one step through the table.  A day has 12 hours and
//! `12 mod 7 = 5`, so the first night hour sits five steps after the
//! day ruler.

use chrono::Weekday;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The seven classical planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

/// Chaldean ordering used to advance successive planetary hours.
pub const CHALDEAN_ORDER: [Planet; 7] = [
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
];

/// Day ruler per weekday, indexed by `Weekday::num_days_from_sunday()`.
const DAY_RULERS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

/// Planetary hours per half-day.
pub const HOURS_PER_HALF_DAY: usize = 12;

/// Rotation steps between the first day hour and the first night hour.
pub const NIGHT_OFFSET: usize = HOURS_PER_HALF_DAY % CHALDEAN_ORDER.len();

impl Planet {
    /// The planet ruling the first daytime hour of `weekday`.
    pub fn day_ruler(weekday: Weekday) -> Planet {
        DAY_RULERS[weekday.num_days_from_sunday() as usize]
    }

    /// Position of this planet in [`CHALDEAN_ORDER`].
    pub const fn chaldean_position(self) -> usize {
        match self {
            Planet::Saturn => 0,
            Planet::Jupiter => 1,
            Planet::Mars => 2,
            Planet::Sun => 3,
            Planet::Venus => 4,
            Planet::Mercury => 5,
            Planet::Moon => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ruler of the planetary hour `index` (0-based) on the astronomical day
/// anchored at a sunrise falling on `weekday`.
///
/// ```
/// use chrono::Weekday;
/// use sunhours::{planetary_hour_ruler, Planet};
///
/// assert_eq!(planetary_hour_ruler(Weekday::Sun, 0, true), Planet::Sun);
/// assert_eq!(planetary_hour_ruler(Weekday::Sun, 3, true), Planet::Moon);
/// assert_eq!(planetary_hour_ruler(Weekday::Sun, 0, false), Planet::Jupiter);
/// ```
pub fn planetary_hour_ruler(weekday: Weekday, index: usize, is_daytime: bool) -> Planet {
    let start = Planet::day_ruler(weekday).chaldean_position();
    let phase = if is_daytime { 0 } else { NIGHT_OFFSET };
    CHALDEAN_ORDER[(start + phase + index) % CHALDEAN_ORDER.len()]
}
