// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical event provider seam.
//!
//! Sunrise and sunset are computed outside this crate.  Engines reach them
//! through [`AstronomicalEventProvider`], an async trait so that
//! implementations may sit on top of a remote ephemeris service or a
//! database as easily as on a local solar-position routine.
//!
//! Absence of an event (polar day, polar night) is reported through
//! [`SunriseSunset`]'s optional fields; a provider [`Err`] means the
//! lookup itself failed.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::day_window::DayWindow;
use crate::error::{Boundary, PeriodError, PeriodResult};
use crate::instant::Instant;

/// Observer position on the Earth.
///
/// Opaque to the period engines; it is handed to the provider unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Altitude above the ellipsoid in metres.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }
}

/// Sunrise and sunset for one civil date, either of which may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SunriseSunset {
    pub sunrise: Option<Instant>,
    pub sunset: Option<Instant>,
}

impl SunriseSunset {
    pub fn new(sunrise: Instant, sunset: Instant) -> Self {
        Self {
            sunrise: Some(sunrise),
            sunset: Some(sunset),
        }
    }

    /// Neither event occurs on this date.
    pub fn absent() -> Self {
        Self::default()
    }

    /// The boundary (or boundaries) missing, if any.
    pub fn missing(&self) -> Option<Boundary> {
        match (self.sunrise, self.sunset) {
            (Some(_), Some(_)) => None,
            (None, Some(_)) => Some(Boundary::Sunrise),
            (Some(_), None) => Some(Boundary::Sunset),
            (None, None) => Some(Boundary::Both),
        }
    }

    /// Promote to a [`DayWindow`] for `date`.
    ///
    /// Fails when either boundary is absent or when the sunrise does not
    /// precede the sunset.
    pub fn day_window(&self, date: NaiveDate) -> PeriodResult<DayWindow> {
        match (self.sunrise, self.sunset) {
            (Some(sunrise), Some(sunset)) => DayWindow::new(date, sunrise, sunset),
            _ => Err(PeriodError::MissingAstronomicalData {
                date,
                missing: self.missing().unwrap_or(Boundary::Both),
            }),
        }
    }
}

/// Failure of the provider itself (I/O, remote service, ephemeris range).
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ProviderError(Box<dyn Error + Send + Sync>);

impl ProviderError {
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// Source of sunrise/sunset instants.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait AstronomicalEventProvider: Send + Sync {
    /// Sunrise and sunset for the civil `date` at `location`.
    ///
    /// # Returns
    /// * `Ok(SunriseSunset)` - with `None` for events that do not occur
    /// * `Err(ProviderError)` - if the lookup itself failed
    async fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SunriseSunset, ProviderError>;
}

#[async_trait]
impl<P: AstronomicalEventProvider + ?Sized> AstronomicalEventProvider for &P {
    async fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SunriseSunset, ProviderError> {
        (**self).sunrise_sunset(date, location).await
    }
}

#[async_trait]
impl<P: AstronomicalEventProvider + ?Sized> AstronomicalEventProvider for std::sync::Arc<P> {
    async fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<SunriseSunset, ProviderError> {
        (**self).sunrise_sunset(date, location).await
    }
}

/// Table-backed provider for precomputed rise/set times.
///
/// Dates without an entry report both events as absent.  Every lookup is
/// counted, which makes the number of provider round-trips observable.
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use sunhours::InMemoryProvider;
///
/// let provider = InMemoryProvider::new().with_daily_times(
///     NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
///     3,
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
/// );
/// assert_eq!(provider.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    entries: HashMap<NaiveDate, Result<SunriseSunset, String>>,
    calls: AtomicUsize,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record sunrise and sunset for `date`.
    pub fn insert(&mut self, date: NaiveDate, sunrise: Instant, sunset: Instant) {
        self.entries
            .insert(date, Ok(SunriseSunset::new(sunrise, sunset)));
    }

    /// Record an arbitrary (possibly partial) result for `date`.
    pub fn insert_events(&mut self, date: NaiveDate, events: SunriseSunset) {
        self.entries.insert(date, Ok(events));
    }

    /// Make lookups for `date` fail with `message`.
    pub fn insert_failure(&mut self, date: NaiveDate, message: impl Into<String>) {
        self.entries.insert(date, Err(message.into()));
    }

    /// Fill `days` consecutive dates from `first` with the same UTC
    /// wall-clock sunrise and sunset.
    pub fn with_daily_times(
        mut self,
        first: NaiveDate,
        days: u32,
        sunrise: NaiveTime,
        sunset: NaiveTime,
    ) -> Self {
        for date in first.iter_days().take(days as usize) {
            let rise = date.and_time(sunrise).and_utc();
            let set = date.and_time(sunset).and_utc();
            self.insert(date, rise, set);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn reset_calls(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }
}

#[async_trait]
impl AstronomicalEventProvider for InMemoryProvider {
    async fn sunrise_sunset(
        &self,
        date: NaiveDate,
        _location: &GeoLocation,
    ) -> Result<SunriseSunset, ProviderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match self.entries.get(&date) {
            Some(Ok(events)) => Ok(*events),
            Some(Err(message)) => Err(ProviderError::new(message.clone())),
            None => Ok(SunriseSunset::absent()),
        }
    }
}
