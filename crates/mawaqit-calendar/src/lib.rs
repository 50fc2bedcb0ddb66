//! Hijri calendar conversion and the fixed bilingual name tables.
//!
//! Providers normally ship both calendar labels with every response; this
//! crate exists for the offline fallback path, where the labels have to be
//! synthesized locally, and for the weekday tables the monthly view uses to
//! recompute day names instead of trusting the payload.

use chrono::{Datelike, NaiveDate, Weekday};
use hijri_date::HijriDate;
use mawaqit_types::{DateInfo, GregorianDateInfo, HijriDateInfo};
use thiserror::Error;

/// Minimum Gregorian year for Hijri conversion.
pub const HIJRI_MIN_YEAR: i32 = 1938;
/// Maximum Gregorian year for Hijri conversion.
pub const HIJRI_MAX_YEAR: i32 = 2076;

/// Errors from calendar conversion.
#[derive(Debug, Error, Clone)]
pub enum CalendarError {
    /// Date outside supported range (1938-2076).
    #[error("date {date} is out of supported range ({min} to {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}

impl CalendarError {
    fn date_out_of_range(date: NaiveDate) -> Self {
        Self::DateOutOfRange {
            date,
            min: NaiveDate::from_ymd_opt(HIJRI_MIN_YEAR, 1, 1).unwrap_or_default(),
            max: NaiveDate::from_ymd_opt(HIJRI_MAX_YEAR, 12, 31).unwrap_or_default(),
        }
    }
}

/// Weekday names indexed 0=Sunday..6=Saturday.
pub const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Arabic weekday names, same indexing as [`WEEKDAYS_EN`].
pub const WEEKDAYS_AR: [&str; 7] = [
    "الأحد",
    "الإثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

pub const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Arabic Gregorian month names, same indexing as [`GREGORIAN_MONTHS_EN`].
pub const GREGORIAN_MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

pub fn weekday_name_en(weekday: Weekday) -> &'static str {
    WEEKDAYS_EN[weekday.num_days_from_sunday() as usize]
}

pub fn weekday_name_ar(weekday: Weekday) -> &'static str {
    WEEKDAYS_AR[weekday.num_days_from_sunday() as usize]
}

/// Returns the English Gregorian month name for a 1-based month number.
pub fn gregorian_month_en(month: u32) -> &'static str {
    GREGORIAN_MONTHS_EN
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("Unknown")
}

/// Maps an English Gregorian month name to its Arabic counterpart.
pub fn gregorian_month_ar(en: &str) -> Option<&'static str> {
    GREGORIAN_MONTHS_EN
        .iter()
        .position(|m| m.eq_ignore_ascii_case(en))
        .map(|i| GREGORIAN_MONTHS_AR[i])
}

/// Returns the Hijri month name (English transliteration).
pub fn hijri_month_name_en(month: usize) -> &'static str {
    match month {
        1 => "Muharram",
        2 => "Safar",
        3 => "Rabi' al-Awwal",
        4 => "Rabi' al-Thani",
        5 => "Jumada al-Ula",
        6 => "Jumada al-Akhirah",
        7 => "Rajab",
        8 => "Sha'ban",
        9 => "Ramadan",
        10 => "Shawwal",
        11 => "Dhu al-Qi'dah",
        12 => "Dhu al-Hijjah",
        _ => "Unknown",
    }
}

/// Returns the Hijri month name in Arabic.
pub fn hijri_month_name_ar(month: usize) -> &'static str {
    match month {
        1 => "محرم",
        2 => "صفر",
        3 => "ربيع الأول",
        4 => "ربيع الثاني",
        5 => "جمادى الأولى",
        6 => "جمادى الآخرة",
        7 => "رجب",
        8 => "شعبان",
        9 => "رمضان",
        10 => "شوال",
        11 => "ذو القعدة",
        12 => "ذو الحجة",
        _ => "غير معروف",
    }
}

/// Converts a Gregorian date to Hijri.
///
/// # Errors
/// Returns `DateOutOfRange` if outside 1938-2076.
pub fn to_hijri(date: NaiveDate) -> Result<HijriDate, CalendarError> {
    if date.year() < HIJRI_MIN_YEAR || date.year() > HIJRI_MAX_YEAR {
        return Err(CalendarError::date_out_of_range(date));
    }
    HijriDate::from_gr(
        date.year() as usize,
        date.month() as usize,
        date.day() as usize,
    )
    .map_err(|_| CalendarError::date_out_of_range(date))
}

/// Builds the paired calendar labels for a date without any network call.
///
/// Infallible so that the always-succeeds daily contract holds: a Hijri
/// conversion failure degrades to a placeholder label rather than an error.
pub fn local_date_info(date: NaiveDate) -> DateInfo {
    let gregorian = GregorianDateInfo {
        day: date.day(),
        month_en: gregorian_month_en(date.month()).to_string(),
        year: date.year(),
    };
    let hijri = match to_hijri(date) {
        Ok(h) => HijriDateInfo {
            day: h.day() as u32,
            month_en: hijri_month_name_en(h.month()).to_string(),
            month_ar: hijri_month_name_ar(h.month()).to_string(),
            year: h.year() as u32,
        },
        Err(_) => HijriDateInfo {
            day: 0,
            month_en: "Unknown".to_string(),
            month_ar: "غير معروف".to_string(),
            year: 0,
        },
    };
    DateInfo { hijri, gregorian }
}
