// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Period engines.
//!
//! [`PeriodEngine<S, P>`] composes the day-window resolver, the
//! partitioner and the labeller of period system `S` on top of provider
//! `P`.  It answers two questions:
//!
//! - which period contains a given instant ([`PeriodEngine::current_period`]);
//! - which periods make up a given civil day ([`PeriodEngine::periods_for_day`]).
//!
//! Each query is a pure function of its inputs plus at most two provider
//! lookups: the current day and one neighbouring day.

use chrono::NaiveDate;
use log::debug;
use std::marker::PhantomData;

use crate::config::PeriodConfig;
use crate::day_window::{DayWindow, DayWindowResolver, Resolution};
use crate::eight_fold::EightFoldType;
use crate::error::PeriodResult;
use crate::instant::{civil_weekday, Instant};
use crate::partition::Partition;
use crate::period::{Interval, Period};
use crate::planet::Planet;
use crate::provider::{AstronomicalEventProvider, GeoLocation};
use crate::system::{EightFold, PeriodSystem, PlanetaryHours};

/// A planetary hour.
pub type PlanetaryHour = Period<Planet>;

/// An eight-fold day period.
pub type EightFoldPeriod = Period<EightFoldType>;

/// Engine for the planetary-hour system.
pub type PlanetaryHourEngine<P> = PeriodEngine<PlanetaryHours, P>;

/// Engine for the eight-fold system.
pub type EightFoldEngine<P> = PeriodEngine<EightFold, P>;

/// Period lookups for system `S` backed by provider `P`.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
/// use sunhours::{GeoLocation, InMemoryProvider, Planet, PlanetaryHourEngine};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// // 2024-03-10 is a Sunday.
/// let provider = InMemoryProvider::new().with_daily_times(
///     NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
///     3,
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
/// );
/// let engine = PlanetaryHourEngine::new(provider);
/// let here = GeoLocation::new(23.0, 72.6, 50.0);
///
/// let query = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
/// let hour = engine.current_period(query, &here).await.unwrap();
/// assert_eq!(hour.label(), Planet::Moon);
/// assert_eq!(hour.ordinal(), 4);
/// # });
/// ```
pub struct PeriodEngine<S: PeriodSystem, P> {
    provider: P,
    config: PeriodConfig,
    _system: PhantomData<S>,
}

impl<S, P> PeriodEngine<S, P>
where
    S: PeriodSystem,
    P: AstronomicalEventProvider,
{
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, PeriodConfig::default())
    }

    pub fn with_config(provider: P, config: PeriodConfig) -> Self {
        Self {
            provider,
            config,
            _system: PhantomData,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &PeriodConfig {
        &self.config
    }

    fn resolver(&self) -> DayWindowResolver<'_, P> {
        DayWindowResolver::new(&self.provider, self.config)
    }

    /// Day window of the astronomical day containing `instant`.
    pub async fn day_window(
        &self,
        instant: Instant,
        location: &GeoLocation,
    ) -> PeriodResult<DayWindow> {
        self.resolver().resolve(instant, location).await
    }

    /// Sunrise → next sunrise for civil `date`.
    pub async fn day_span(&self, date: NaiveDate, location: &GeoLocation) -> PeriodResult<Interval> {
        let resolver = self.resolver();
        let window = resolver.window_for_date(date, location).await?;
        let next_sunrise = resolver.next_sunrise(&window, location).await;
        Ok(Interval::new(window.sunrise(), next_sunrise))
    }

    /// The period containing `instant`.
    ///
    /// Fails only when the sunrise or sunset of the instant's own civil
    /// date is unavailable.
    pub async fn current_period(
        &self,
        instant: Instant,
        location: &GeoLocation,
    ) -> PeriodResult<Period<S::Label>> {
        let resolver = self.resolver();
        let Resolution {
            window,
            known_next_sunrise,
        } = resolver.resolve_with_successor(instant, location).await?;

        let (span, is_daytime, weekday) = if instant < window.sunrise() {
            // Lookback failed: the night before this window is estimated.
            let night = resolver.estimated_previous_night(&window);
            let anchor = resolver.estimated_previous_sunrise(&window);
            (night, false, civil_weekday(anchor, self.config.civil_offset))
        } else if instant < window.sunset() {
            (window.daylight(), true, window.weekday(&self.config))
        } else {
            // After a rollover the query's own sunrise closes this night;
            // it is later than the instant and so later than the sunset.
            let next_sunrise = match known_next_sunrise {
                Some(sunrise) => sunrise,
                None => resolver.next_sunrise(&window, location).await,
            };
            (
                Interval::new(window.sunset(), next_sunrise),
                false,
                window.weekday(&self.config),
            )
        };

        let partition = Partition::new(span, S::SEGMENTS)?;
        let segment = partition.segment_at(instant, is_daytime);
        let period = Period {
            label: S::label(weekday, segment.index, is_daytime),
            segment,
            weekday,
        };
        debug!("{}: {instant} -> {:?} #{}", S::NAME, period.label, period.ordinal());
        Ok(period)
    }

    /// All `2 × S::SEGMENTS` periods of civil `date`, day periods first,
    /// in ascending chronological order.
    ///
    /// No rollover is applied: the day is the one starting at `date`'s
    /// sunrise.
    pub async fn periods_for_day(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> PeriodResult<Vec<Period<S::Label>>> {
        let resolver = self.resolver();
        let window = resolver.window_for_date(date, location).await?;
        let next_sunrise = resolver.next_sunrise(&window, location).await;
        let weekday = window.weekday(&self.config);

        let day = Partition::new(window.daylight(), S::SEGMENTS)?;
        let night = Partition::new(Interval::new(window.sunset(), next_sunrise), S::SEGMENTS)?;

        let periods: Vec<_> = day
            .segments(true)
            .chain(night.segments(false))
            .map(|segment| Period {
                label: S::label(weekday, segment.index, segment.is_daytime),
                segment,
                weekday,
            })
            .collect();
        debug!("{}: {} periods for {date}", S::NAME, periods.len());
        Ok(periods)
    }
}

/// The planetary hour containing `instant`, with the default configuration.
pub async fn current_planetary_hour<P>(
    provider: &P,
    instant: Instant,
    location: &GeoLocation,
) -> PeriodResult<PlanetaryHour>
where
    P: AstronomicalEventProvider + ?Sized,
{
    PlanetaryHourEngine::new(provider)
        .current_period(instant, location)
        .await
}

/// The 24 planetary hours of civil `date`, with the default configuration.
pub async fn planetary_hours_for_day<P>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
) -> PeriodResult<Vec<PlanetaryHour>>
where
    P: AstronomicalEventProvider + ?Sized,
{
    PlanetaryHourEngine::new(provider)
        .periods_for_day(date, location)
        .await
}

/// The eight-fold period containing `instant`, with the default configuration.
pub async fn current_eight_fold_period<P>(
    provider: &P,
    instant: Instant,
    location: &GeoLocation,
) -> PeriodResult<EightFoldPeriod>
where
    P: AstronomicalEventProvider + ?Sized,
{
    EightFoldEngine::new(provider)
        .current_period(instant, location)
        .await
}

/// The 16 eight-fold periods of civil `date`, with the default configuration.
pub async fn eight_fold_periods_for_day<P>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
) -> PeriodResult<Vec<EightFoldPeriod>>
where
    P: AstronomicalEventProvider + ?Sized,
{
    EightFoldEngine::new(provider)
        .periods_for_day(date, location)
        .await
}
