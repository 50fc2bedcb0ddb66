//! Ordered-fallback resolution of prayer times.
//!
//! The daily path never fails: the chain is walked in order and, if every
//! provider is down, a fixed default set is served with a locally computed
//! date label. The monthly path is the opposite — chain exhaustion surfaces
//! as an error, because fabricating thirty plausible-looking rows is worse
//! for trust than a visible retry state.

use chrono::{Datelike, Local, NaiveDate};
use mawaqit_types::{
    ClockTime, Coordinate, FALLBACK_SOURCE, MonthlyDay, PrayerTimes, ResolvedResult,
};
use mawaqit_calendar::{local_date_info, weekday_name_ar, weekday_name_en};
use smallvec::SmallVec;
use tracing::warn;

use crate::error::{ProviderError, ResolveError};
use crate::provider::{DayData, HttpProvider, numeric, parse_timings};

/// Built-in safety-net timings served when every provider is down.
pub fn default_times() -> PrayerTimes {
    PrayerTimes {
        fajr: ClockTime::new_unchecked(4, 30),
        sunrise: ClockTime::new_unchecked(6, 0),
        dhuhr: ClockTime::new_unchecked(12, 0),
        asr: ClockTime::new_unchecked(15, 30),
        maghrib: ClockTime::new_unchecked(18, 0),
        isha: ClockTime::new_unchecked(19, 30),
    }
}

/// Resolves prayer times through an ordered provider chain.
pub struct SmartPrayerTimes {
    providers: SmallVec<[HttpProvider; 2]>,
}

impl SmartPrayerTimes {
    /// Creates a resolver with the default primary provider.
    ///
    /// # Errors
    /// Returns [`ResolveError::Client`] if the HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self, ResolveError> {
        Ok(Self {
            providers: SmallVec::from_iter([HttpProvider::aladhan()?]),
        })
    }

    /// Creates a resolver over an explicit provider chain, tried in order.
    pub fn from_providers(providers: impl IntoIterator<Item = HttpProvider>) -> Self {
        Self {
            providers: providers.into_iter().collect(),
        }
    }

    /// Appends a further provider to the end of the chain.
    pub fn provider(mut self, provider: HttpProvider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Resolves today's timings for a coordinate. Never fails: provider
    /// failures advance the chain, and chain exhaustion yields the built-in
    /// default set with `source == "default"`.
    pub async fn get_prayer_times(&self, coords: Coordinate) -> ResolvedResult {
        let today = Local::now().date_naive();
        for provider in &self.providers {
            match provider.fetch_day(coords, today).await {
                Ok(result) => return result,
                Err(e) => warn!(
                    provider = provider.name(),
                    error = %e,
                    "daily timings fetch failed, advancing fallback chain"
                ),
            }
        }
        warn!("all providers failed, serving built-in default timings");
        ResolvedResult {
            times: default_times(),
            date: local_date_info(today),
            source: FALLBACK_SOURCE.to_owned(),
        }
    }

    /// Resolves a whole month in one batched request per provider attempt.
    ///
    /// Weekday names in each row are recomputed from the constructed
    /// Gregorian date; the payload's weekday field is not trusted.
    ///
    /// # Errors
    /// - [`ResolveError::InvalidMonth`] for a month outside 1..=12.
    /// - [`ResolveError::AllProvidersFailed`] when the whole chain fails.
    pub async fn get_monthly_times(
        &self,
        coords: Coordinate,
        month: u32,
        year: i32,
    ) -> Result<Vec<MonthlyDay>, ResolveError> {
        if !(1..=12).contains(&month) {
            return Err(ResolveError::InvalidMonth(month));
        }
        for provider in &self.providers {
            match provider.fetch_month(coords, month, year).await {
                Ok(days) => match monthly_rows(&days, month, year) {
                    Ok(rows) => return Ok(rows),
                    Err(e) => warn!(
                        provider = provider.name(),
                        error = %e,
                        "monthly payload rejected, advancing fallback chain"
                    ),
                },
                Err(e) => warn!(
                    provider = provider.name(),
                    error = %e,
                    "monthly timings fetch failed, advancing fallback chain"
                ),
            }
        }
        Err(ResolveError::AllProvidersFailed {
            attempts: self.providers.len(),
        })
    }
}

fn monthly_rows(
    days: &[DayData],
    month: u32,
    year: i32,
) -> Result<Vec<MonthlyDay>, ProviderError> {
    days.iter()
        .map(|raw| {
            let times = parse_timings(&raw.timings)?;
            let day: u32 = numeric(&raw.date.gregorian.day, "gregorian day")?;
            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                ProviderError::Payload(format!("day {day} does not exist in {month}/{year}"))
            })?;
            let weekday = date.weekday();
            let hijri_label = format!(
                "{} {} {}",
                raw.date.hijri.day.trim(),
                raw.date.hijri.month.ar,
                raw.date.hijri.year.trim()
            );
            Ok(MonthlyDay {
                gregorian_day: day,
                hijri_label,
                weekday_en: weekday_name_en(weekday).to_owned(),
                weekday_ar: weekday_name_ar(weekday).to_owned(),
                times,
            })
        })
        .collect()
}
