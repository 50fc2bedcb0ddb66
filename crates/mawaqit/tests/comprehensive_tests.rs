//! End-to-end behavior of the resolution service through the facade API.

use chrono::{Duration, NaiveTime};
use mawaqit::prelude::*;
use mawaqit::{FALLBACK_SOURCE, GregorianDateInfo, HijriDateInfo, MemoryStore, default_times};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CAIRO: Coordinate = Coordinate::new_unchecked(30.0444, 31.2357);

fn sample_times() -> PrayerTimes {
    PrayerTimes {
        fajr: ClockTime::new_unchecked(5, 15),
        sunrise: ClockTime::new_unchecked(6, 40),
        dhuhr: ClockTime::new_unchecked(12, 30),
        asr: ClockTime::new_unchecked(15, 45),
        maghrib: ClockTime::new_unchecked(18, 15),
        isha: ClockTime::new_unchecked(19, 45),
    }
}

fn day_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "timings": {
                "Fajr": "05:15 (EET)",
                "Sunrise": "06:40 (EET)",
                "Dhuhr": "12:30 (EET)",
                "Asr": "15:45 (EET)",
                "Maghrib": "18:15 (EET)",
                "Isha": "19:45 (EET)"
            },
            "date": {
                "hijri": {
                    "day": "21",
                    "month": { "en": "Sha'ban", "ar": "شعبان" },
                    "year": "1445"
                },
                "gregorian": {
                    "day": "01",
                    "month": { "en": "March" },
                    "year": "2024"
                }
            }
        }
    })
}

#[test]
fn test_time_truncation() {
    let fajr = ClockTime::parse("05:15 (EET)").unwrap();
    assert_eq!(fajr.to_string(), "05:15");
}

#[test]
fn test_next_prayer_midday() {
    let probe = NaiveTime::from_hms_opt(13, 0, 0).unwrap();
    let next = next_prayer(&sample_times(), probe, false);
    assert_eq!(next.prayer, Prayer::Asr);
    assert_eq!(next.countdown(), "02:45:00");
}

#[test]
fn test_next_prayer_day_wraparound() {
    let probe = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
    let next = next_prayer(&sample_times(), probe, false);
    assert_eq!(next.prayer, Prayer::Fajr);
    assert_eq!(next.countdown(), "06:15:00");
}

#[test]
fn test_cache_round_trip_and_expiry() {
    let result = ResolvedResult {
        times: sample_times(),
        date: DateInfo {
            hijri: HijriDateInfo {
                day: 21,
                month_en: "Sha'ban".to_string(),
                month_ar: "شعبان".to_string(),
                year: 1445,
            },
            gregorian: GregorianDateInfo {
                day: 1,
                month_en: "March".to_string(),
                year: 2024,
            },
        },
        source: "aladhan".to_string(),
    };

    let cache = PrayerTimesCache::new(MemoryStore::new());
    cache.set(CAIRO, &result);
    assert_eq!(cache.get(CAIRO), Some(result.clone()));

    let expired = PrayerTimesCache::with_ttl(MemoryStore::new(), Duration::zero());
    expired.set(CAIRO, &result);
    assert_eq!(expired.get(CAIRO), None);
}

#[tokio::test]
async fn test_cache_hit_skips_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/timings/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(day_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpProvider::new("primary", &server.uri(), 5).unwrap();
    let resolver = SmartPrayerTimes::from_providers([provider]);
    let cache = PrayerTimesCache::new(MemoryStore::new());

    // Widget lookup pattern: cache first, resolver on miss, then populate.
    let first = match cache.get(CAIRO) {
        Some(hit) => hit,
        None => {
            let fresh = resolver.get_prayer_times(CAIRO).await;
            cache.set(CAIRO, &fresh);
            fresh
        }
    };
    assert_eq!(first.source, "primary");

    let second = cache.get(CAIRO).expect("second lookup should hit the cache");
    assert_eq!(second, first);
    // The mock's expect(1) verifies on drop that only one request was made.
}

#[tokio::test]
async fn test_daily_widget_never_sees_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = HttpProvider::new("primary", &server.uri(), 5).unwrap();
    let resolver = SmartPrayerTimes::from_providers([provider]);
    let result = resolver.get_prayer_times(CAIRO).await;

    assert_eq!(result.source, FALLBACK_SOURCE);
    assert_eq!(result.times, default_times());
    assert!(result.times.is_ordered());
}

#[tokio::test]
async fn test_monthly_widget_sees_the_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = HttpProvider::new("primary", &server.uri(), 5).unwrap();
    let resolver = SmartPrayerTimes::from_providers([provider]);

    assert!(resolver.get_monthly_times(CAIRO, 2, 2024).await.is_err());
}
