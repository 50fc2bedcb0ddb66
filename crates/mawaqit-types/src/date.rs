use crate::prayer::PrayerTimes;
use serde::{Deserialize, Serialize};

/// `source` value of a result produced by the built-in safety net rather
/// than an upstream provider.
pub const FALLBACK_SOURCE: &str = "default";

/// Hijri (lunar) calendar label for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDateInfo {
    pub day: u32,
    pub month_en: String,
    pub month_ar: String,
    pub year: u32,
}

/// Gregorian calendar label for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GregorianDateInfo {
    pub day: u32,
    pub month_en: String,
    pub year: i32,
}

/// Paired calendar representation produced alongside the timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    pub hijri: HijriDateInfo,
    pub gregorian: GregorianDateInfo,
}

/// A resolved single-day answer: timings, calendar labels, and the provider
/// that produced them (or [`FALLBACK_SOURCE`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedResult {
    pub times: PrayerTimes,
    pub date: DateInfo,
    pub source: String,
}

impl ResolvedResult {
    /// True when this result came from the built-in default set rather than
    /// an upstream provider.
    pub fn is_fallback(&self) -> bool {
        self.source == FALLBACK_SOURCE
    }
}

/// One row of a monthly timings table.
///
/// Weekday names are recomputed from the Gregorian date by the resolver,
/// never taken from the provider payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDay {
    pub gregorian_day: u32,
    pub hijri_label: String,
    pub weekday_en: String,
    pub weekday_ar: String,
    pub times: PrayerTimes,
}
