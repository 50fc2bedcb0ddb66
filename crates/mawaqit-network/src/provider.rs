//! One upstream astronomical-calculation endpoint.
//!
//! All configured providers speak the same wire shape (an AlAdhan-style JSON
//! envelope); they differ only in name and base URL, so a fallback chain is
//! just an ordered list of these.

use std::time::Duration;

use chrono::NaiveDate;
use mawaqit_types::{
    ClockTime, Coordinate, DateInfo, GregorianDateInfo, HijriDateInfo, PrayerTimes, ResolvedResult,
};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, ResolveError};

/// Production endpoint of the primary provider.
pub const ALADHAN_BASE_URL: &str = "https://api.aladhan.com/v1";

/// Per-request timeout. Bounds how long the fallback chain can stall on a
/// dead provider.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Calculation method sent upstream (Egyptian General Authority of Survey).
const CALCULATION_METHOD: u8 = 5;

/// A named prayer-times provider reachable over HTTP.
pub struct HttpProvider {
    name: String,
    base_url: Url,
    client: Client,
}

impl HttpProvider {
    /// Creates the default primary provider.
    ///
    /// # Errors
    /// Returns [`ResolveError::Client`] if the HTTP client cannot be built.
    pub fn aladhan() -> Result<Self, ResolveError> {
        Self::new("aladhan", ALADHAN_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a provider with a custom name and base URL. Tests point this
    /// at a mock server.
    ///
    /// # Errors
    /// Returns [`ResolveError::Client`] if the HTTP client cannot be built,
    /// or [`ResolveError::BaseUrl`] if `base_url` does not parse.
    pub fn new(name: &str, base_url: &str, timeout_secs: u64) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("mawaqit/0.3 (prayer times client)")
            .build()?;

        // Exactly one trailing slash, so joins append to the path instead of
        // replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ResolveError::BaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: name.to_owned(),
            base_url,
            client,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetches the timings for one day at one coordinate.
    pub(crate) async fn fetch_day(
        &self,
        coords: Coordinate,
        date: NaiveDate,
    ) -> Result<ResolvedResult, ProviderError> {
        let url = self.endpoint(&format!("timings/{}", date.format("%d-%m-%Y")), coords)?;
        let envelope: DayEnvelope = self.request_json(url).await?;
        day_to_result(&envelope.data, &self.name)
    }

    /// Fetches the raw day records for an entire month in one request.
    pub(crate) async fn fetch_month(
        &self,
        coords: Coordinate,
        month: u32,
        year: i32,
    ) -> Result<Vec<DayData>, ProviderError> {
        let url = self.endpoint(&format!("calendar/{year}/{month}"), coords)?;
        let envelope: MonthEnvelope = self.request_json(url).await?;
        Ok(envelope.data)
    }

    fn endpoint(&self, path: &str, coords: Coordinate) -> Result<Url, ProviderError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ProviderError::Payload(format!("invalid request URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("latitude", &coords.lat.to_string())
            .append_pair("longitude", &coords.lng.to_string())
            .append_pair("method", &CALCULATION_METHOD.to_string());
        Ok(url)
    }

    async fn request_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Payload(e.to_string()))
    }
}

// Wire shapes. Hijri day and year arrive as strings upstream.

#[derive(Debug, Deserialize)]
pub(crate) struct DayEnvelope {
    pub data: DayData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MonthEnvelope {
    pub data: Vec<DayData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DayData {
    pub timings: RawTimings,
    pub date: RawDate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDate {
    pub hijri: RawHijri,
    pub gregorian: RawGregorian,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawHijri {
    pub day: String,
    pub month: RawHijriMonth,
    pub year: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawHijriMonth {
    pub en: String,
    pub ar: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGregorian {
    pub day: String,
    pub month: RawGregorianMonth,
    pub year: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGregorianMonth {
    pub en: String,
}

pub(crate) fn parse_timings(raw: &RawTimings) -> Result<PrayerTimes, ProviderError> {
    Ok(PrayerTimes {
        fajr: clock(&raw.fajr)?,
        sunrise: clock(&raw.sunrise)?,
        dhuhr: clock(&raw.dhuhr)?,
        asr: clock(&raw.asr)?,
        maghrib: clock(&raw.maghrib)?,
        isha: clock(&raw.isha)?,
    })
}

fn clock(raw: &str) -> Result<ClockTime, ProviderError> {
    ClockTime::parse(raw).map_err(|e| ProviderError::Payload(e.to_string()))
}

pub(crate) fn numeric<T: std::str::FromStr>(raw: &str, field: &str) -> Result<T, ProviderError> {
    raw.trim()
        .parse()
        .map_err(|_| ProviderError::Payload(format!("non-numeric {field}: {raw:?}")))
}

pub(crate) fn day_to_result(day: &DayData, source: &str) -> Result<ResolvedResult, ProviderError> {
    let times = parse_timings(&day.timings)?;
    let hijri = HijriDateInfo {
        day: numeric(&day.date.hijri.day, "hijri day")?,
        month_en: day.date.hijri.month.en.clone(),
        month_ar: day.date.hijri.month.ar.clone(),
        year: numeric(&day.date.hijri.year, "hijri year")?,
    };
    let gregorian = GregorianDateInfo {
        day: numeric(&day.date.gregorian.day, "gregorian day")?,
        month_en: day.date.gregorian.month.en.clone(),
        year: numeric(&day.date.gregorian.year, "gregorian year")?,
    };
    Ok(ResolvedResult {
        times,
        date: DateInfo { hijri, gregorian },
        source: source.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_day() -> DayData {
        DayData {
            timings: RawTimings {
                fajr: "05:15 (EET)".to_string(),
                sunrise: "06:40 (EET)".to_string(),
                dhuhr: "12:30 (EET)".to_string(),
                asr: "15:45 (EET)".to_string(),
                maghrib: "18:15 (EET)".to_string(),
                isha: "19:45 (EET)".to_string(),
            },
            date: RawDate {
                hijri: RawHijri {
                    day: "21".to_string(),
                    month: RawHijriMonth {
                        en: "Sha'ban".to_string(),
                        ar: "شعبان".to_string(),
                    },
                    year: "1445".to_string(),
                },
                gregorian: RawGregorian {
                    day: "01".to_string(),
                    month: RawGregorianMonth {
                        en: "March".to_string(),
                    },
                    year: "2024".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_day_to_result_truncates_and_parses() {
        let result = day_to_result(&raw_day(), "aladhan").unwrap();
        assert_eq!(result.times.fajr.to_string(), "05:15");
        assert_eq!(result.times.isha.to_string(), "19:45");
        assert_eq!(result.date.hijri.day, 21);
        assert_eq!(result.date.hijri.year, 1445);
        assert_eq!(result.date.gregorian.day, 1);
        assert_eq!(result.source, "aladhan");
    }

    #[test]
    fn test_unparseable_time_is_a_payload_error() {
        let mut day = raw_day();
        day.timings.fajr = "dawn".to_string();
        assert!(matches!(
            day_to_result(&day, "aladhan"),
            Err(ProviderError::Payload(_))
        ));
    }

    #[test]
    fn test_non_numeric_hijri_day_is_a_payload_error() {
        let mut day = raw_day();
        day.date.hijri.day = "twenty-one".to_string();
        assert!(matches!(
            day_to_result(&day, "aladhan"),
            Err(ProviderError::Payload(_))
        ));
    }

    #[test]
    fn test_base_url_normalisation() {
        let with_slash = HttpProvider::new("a", "https://api.example.com/v1/", 5).unwrap();
        let without = HttpProvider::new("b", "https://api.example.com/v1", 5).unwrap();
        assert_eq!(with_slash.base_url.as_str(), without.base_url.as_str());
    }

    #[test]
    fn test_endpoint_query_parameters() {
        let provider = HttpProvider::new("a", "https://api.example.com/v1", 5).unwrap();
        let coords = Coordinate::new_unchecked(30.0444, 31.2357);
        let url = provider.endpoint("calendar/2024/2", coords).unwrap();
        assert!(url.path().ends_with("/v1/calendar/2024/2"));
        assert!(url.query().unwrap().contains("latitude=30.0444"));
        assert!(url.query().unwrap().contains("longitude=31.2357"));
    }
}
