// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day windows and the previous-day rollover.
//!
//! An astronomical day runs from one sunrise to the next.  An instant that
//! falls before the sunrise of its own civil date therefore belongs to the
//! *previous* civil date's day window.  [`DayWindowResolver`] resolves
//! that case with exactly one extra provider lookup and never chains
//! further back, so a resolution costs at most two provider calls.
//!
//! Lookups for neighbouring days (previous day for the rollover, next day
//! for the end of the night) are best-effort: when they fail the resolver
//! assumes [`PeriodConfig::fallback_span`] from the boundary it does know.

use chrono::{NaiveDate, TimeDelta, Weekday};
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::PeriodConfig;
use crate::error::{PeriodError, PeriodResult};
use crate::instant::{civil_date, civil_weekday, Instant};
use crate::period::Interval;
use crate::provider::{AstronomicalEventProvider, GeoLocation, SunriseSunset};

/// Sunrise/sunset pair identifying one astronomical day.
///
/// Invariant: `sunrise < sunset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayWindow {
    date: NaiveDate,
    sunrise: Instant,
    sunset: Instant,
}

impl DayWindow {
    /// Build the window for civil `date`, rejecting `sunrise >= sunset`.
    pub fn new(date: NaiveDate, sunrise: Instant, sunset: Instant) -> PeriodResult<Self> {
        if sunrise < sunset {
            Ok(Self {
                date,
                sunrise,
                sunset,
            })
        } else {
            Err(PeriodError::InvalidDayWindow {
                date,
                sunrise,
                sunset,
            })
        }
    }

    /// Civil date the provider was asked about.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sunrise(&self) -> Instant {
        self.sunrise
    }

    pub fn sunset(&self) -> Instant {
        self.sunset
    }

    /// Sunrise → sunset.
    pub fn daylight(&self) -> Interval {
        Interval::new(self.sunrise, self.sunset)
    }

    /// Weekday of the anchoring sunrise, read on `config.civil_offset`.
    pub fn weekday(&self, config: &PeriodConfig) -> Weekday {
        civil_weekday(self.sunrise, config.civil_offset)
    }
}

/// A resolved window plus the following sunrise when it is already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub window: DayWindow,
    /// Set when a rollover happened: the sunrise of the query's own civil
    /// date closes the previous day's night.
    pub known_next_sunrise: Option<Instant>,
}

/// Determines which day window a query instant belongs to.
pub struct DayWindowResolver<'a, P: ?Sized> {
    provider: &'a P,
    config: PeriodConfig,
}

impl<'a, P> DayWindowResolver<'a, P>
where
    P: AstronomicalEventProvider + ?Sized,
{
    pub fn new(provider: &'a P, config: PeriodConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &PeriodConfig {
        &self.config
    }

    async fn lookup(&self, date: NaiveDate, location: &GeoLocation) -> PeriodResult<SunriseSunset> {
        debug!("sunrise/sunset lookup for {date}");
        self.provider
            .sunrise_sunset(date, location)
            .await
            .map_err(|source| PeriodError::Provider { date, source })
    }

    /// Window for civil `date`, without rollover.
    ///
    /// Any missing boundary or provider failure is fatal.
    pub async fn window_for_date(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> PeriodResult<DayWindow> {
        self.lookup(date, location).await?.day_window(date)
    }

    /// Window of the astronomical day containing `instant`.
    pub async fn resolve(&self, instant: Instant, location: &GeoLocation) -> PeriodResult<DayWindow> {
        Ok(self.resolve_with_successor(instant, location).await?.window)
    }

    pub(crate) async fn resolve_with_successor(
        &self,
        instant: Instant,
        location: &GeoLocation,
    ) -> PeriodResult<Resolution> {
        let date = civil_date(instant, self.config.civil_offset);
        let today = self.window_for_date(date, location).await?;

        if instant >= today.sunrise {
            return Ok(Resolution {
                window: today,
                known_next_sunrise: None,
            });
        }

        let Some(previous_date) = date.pred_opt() else {
            warn!("no civil date before {date}; keeping its window for {instant}");
            return Ok(Resolution {
                window: today,
                known_next_sunrise: None,
            });
        };

        let previous = match self.lookup(previous_date, location).await {
            Ok(events) => events.day_window(previous_date),
            Err(err) => Err(err),
        };

        match previous {
            Ok(window) => {
                debug!("{instant} precedes sunrise of {date}; rolled over to {previous_date}");
                Ok(Resolution {
                    window,
                    known_next_sunrise: Some(today.sunrise),
                })
            }
            Err(err) => {
                warn!(
                    "previous-day window unavailable ({err}); keeping {date} for {instant}, \
                     boundaries before sunrise are estimated"
                );
                Ok(Resolution {
                    window: today,
                    known_next_sunrise: None,
                })
            }
        }
    }

    /// Sunrise-to-sunrise span assumed around `window` when a neighbouring
    /// day is unavailable.
    ///
    /// Normally [`PeriodConfig::fallback_span`].  The estimate must leave a
    /// non-empty night, so a configured span that does not exceed the
    /// daylight is replaced by the 24-hour default, and daylight of 24 hours
    /// or more gets a night as long as the day.
    pub(crate) fn estimated_span(&self, window: &DayWindow) -> TimeDelta {
        let daylight = window.sunset - window.sunrise;
        let configured = self.config.fallback_span;
        if configured > daylight {
            return configured;
        }
        let default = TimeDelta::hours(PeriodConfig::DEFAULT_FALLBACK_HOURS);
        let span = if default > daylight {
            default
        } else {
            daylight * 2
        };
        warn!(
            "fallback span {configured} does not cover the {daylight} daylight of {}; using {span}",
            window.date
        );
        span
    }

    /// Sunrise that closes the night of `window`.
    ///
    /// Falls back to `window.sunrise` plus [`Self::estimated_span`] when the
    /// next civil date's sunrise is unavailable or does not follow the
    /// sunset.  The result is always after `window.sunset`.
    pub async fn next_sunrise(&self, window: &DayWindow, location: &GeoLocation) -> Instant {
        let estimate = window.sunrise + self.estimated_span(window);
        let Some(next_date) = window.date.succ_opt() else {
            warn!("no civil date after {}; assuming next sunrise at {estimate}", window.date);
            return estimate;
        };

        match self.lookup(next_date, location).await {
            Ok(SunriseSunset {
                sunrise: Some(sunrise),
                ..
            }) if sunrise > window.sunset => sunrise,
            Ok(events) => {
                warn!(
                    "no usable sunrise for {next_date} ({events:?}); assuming next sunrise at {estimate}"
                );
                estimate
            }
            Err(err) => {
                warn!("{err}; assuming next sunrise at {estimate}");
                estimate
            }
        }
    }

    /// Sunrise assumed to open the day before `window`.
    pub(crate) fn estimated_previous_sunrise(&self, window: &DayWindow) -> Instant {
        window.sunrise - self.estimated_span(window)
    }

    /// Night span ending at `window.sunrise`, estimated from
    /// [`Self::estimated_span`].  Never empty.
    ///
    /// Used only when an instant precedes the window and the previous day
    /// could not be fetched.
    pub(crate) fn estimated_previous_night(&self, window: &DayWindow) -> Interval {
        Interval::new(window.sunset - self.estimated_span(window), window.sunrise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::InMemoryProvider;
    use chrono::{NaiveTime, TimeZone, Utc};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> Instant {
        Utc.with_ymd_and_hms(2024, 3, d, h, m, 0).unwrap()
    }

    fn provider(first: u32, days: u32) -> InMemoryProvider {
        InMemoryProvider::new().with_daily_times(
            date(first),
            days,
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        )
    }

    fn here() -> GeoLocation {
        GeoLocation::new(23.0, 72.6, 50.0)
    }

    #[test]
    fn test_day_window_invariant() {
        assert!(DayWindow::new(date(10), at(10, 6, 0), at(10, 18, 0)).is_ok());
        assert!(matches!(
            DayWindow::new(date(10), at(10, 18, 0), at(10, 6, 0)),
            Err(PeriodError::InvalidDayWindow { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_after_sunrise_uses_same_date() {
        let p = provider(9, 3);
        let resolver = DayWindowResolver::new(&p, PeriodConfig::default());
        let window = resolver.resolve(at(10, 9, 30), &here()).await.unwrap();
        assert_eq!(window.date(), date(10));
        assert_eq!(p.calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_before_sunrise_rolls_over_once() {
        let p = provider(9, 3);
        let resolver = DayWindowResolver::new(&p, PeriodConfig::default());
        let resolution = resolver
            .resolve_with_successor(at(10, 2, 0), &here())
            .await
            .unwrap();
        assert_eq!(resolution.window.date(), date(9));
        assert_eq!(resolution.window.sunrise(), at(9, 6, 0));
        assert_eq!(resolution.known_next_sunrise, Some(at(10, 6, 0)));
        assert_eq!(p.calls(), 2);
    }

    #[tokio::test]
    async fn test_resolve_keeps_window_when_lookback_fails() {
        let mut p = provider(10, 2);
        p.insert_failure(date(9), "offline");
        let resolver = DayWindowResolver::new(&p, PeriodConfig::default());
        let window = resolver.resolve(at(10, 2, 0), &here()).await.unwrap();
        assert_eq!(window.date(), date(10));
        assert_eq!(p.calls(), 2);
    }

    #[tokio::test]
    async fn test_resolve_missing_primary_is_fatal() {
        let p = provider(20, 1);
        let resolver = DayWindowResolver::new(&p, PeriodConfig::default());
        let result = resolver.resolve(at(10, 12, 0), &here()).await;
        assert!(matches!(
            result,
            Err(PeriodError::MissingAstronomicalData { .. })
        ));
    }

    #[tokio::test]
    async fn test_next_sunrise_fallback() {
        let p = provider(10, 1);
        let config = PeriodConfig::default();
        let resolver = DayWindowResolver::new(&p, config);
        let window = resolver.window_for_date(date(10), &here()).await.unwrap();

        let next = resolver.next_sunrise(&window, &here()).await;
        assert_eq!(next, at(11, 6, 0));
        assert_eq!(next - window.sunrise(), TimeDelta::hours(24));
    }

    #[tokio::test]
    async fn test_next_sunrise_from_provider() {
        let mut p = provider(10, 1);
        p.insert(date(11), at(11, 5, 58), at(11, 18, 2));
        let resolver = DayWindowResolver::new(&p, PeriodConfig::default());
        let window = resolver.window_for_date(date(10), &here()).await.unwrap();
        assert_eq!(resolver.next_sunrise(&window, &here()).await, at(11, 5, 58));
    }

    #[test]
    fn test_estimated_previous_night() {
        let p = provider(10, 1);
        let resolver = DayWindowResolver::new(&p, PeriodConfig::default());
        let window = DayWindow::new(date(10), at(10, 6, 0), at(10, 18, 0)).unwrap();
        let night = resolver.estimated_previous_night(&window);
        assert_eq!(night, Interval::new(at(9, 18, 0), at(10, 6, 0)));
    }

    #[tokio::test]
    async fn test_next_sunrise_falls_back_on_provider_error() {
        let mut p = provider(10, 1);
        p.insert_failure(date(11), "ephemeris out of range");
        let resolver = DayWindowResolver::new(&p, PeriodConfig::default());
        let window = resolver.window_for_date(date(10), &here()).await.unwrap();

        assert_eq!(resolver.next_sunrise(&window, &here()).await, at(11, 6, 0));
        assert_eq!(p.calls(), 2);
    }

    #[tokio::test]
    async fn test_next_sunrise_not_after_sunset_is_rejected() {
        let mut p = provider(10, 1);
        p.insert_events(
            date(11),
            SunriseSunset {
                sunrise: Some(at(10, 17, 0)),
                sunset: None,
            },
        );
        let resolver = DayWindowResolver::new(&p, PeriodConfig::default());
        let window = resolver.window_for_date(date(10), &here()).await.unwrap();

        assert_eq!(resolver.next_sunrise(&window, &here()).await, at(11, 6, 0));
        assert_eq!(p.calls(), 2);
    }

    #[tokio::test]
    async fn test_short_fallback_span_still_ends_after_sunset() {
        let p = provider(10, 1);
        let config = PeriodConfig::default().with_fallback_span(TimeDelta::hours(10));
        let resolver = DayWindowResolver::new(&p, config);
        let window = resolver.window_for_date(date(10), &here()).await.unwrap();

        let next = resolver.next_sunrise(&window, &here()).await;
        assert!(next > window.sunset());
        assert_eq!(next, at(11, 6, 0));

        let night = resolver.estimated_previous_night(&window);
        assert!(night.start < night.end);
        assert_eq!(night, Interval::new(at(9, 18, 0), at(10, 6, 0)));
    }

    #[test]
    fn test_estimated_span_covers_long_daylight() {
        let p = provider(10, 1);
        let resolver = DayWindowResolver::new(&p, PeriodConfig::default());
        // 30 hours of daylight leaves no room in a 24-hour day.
        let window = DayWindow::new(date(10), at(10, 0, 0), at(11, 6, 0)).unwrap();

        assert_eq!(resolver.estimated_span(&window), TimeDelta::hours(60));
        assert_eq!(resolver.estimated_previous_sunrise(&window), at(7, 12, 0));
        let night = resolver.estimated_previous_night(&window);
        assert_eq!(night, Interval::new(at(8, 18, 0), at(10, 0, 0)));
    }
}
