use crate::time::ClockTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six daily time slots.
///
/// Sunrise is not a prayer but is carried in the record for display; whether
/// it participates in next-prayer selection is up to the caller (see
/// [`crate::schedule::next_prayer`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All slots in canonical day order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name_en(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    pub fn name_ar(&self) -> &'static str {
        match self {
            Prayer::Fajr => "الفجر",
            Prayer::Sunrise => "الشروق",
            Prayer::Dhuhr => "الظهر",
            Prayer::Asr => "العصر",
            Prayer::Maghrib => "المغرب",
            Prayer::Isha => "العشاء",
        }
    }

    /// True for the five actual prayers; false for Sunrise.
    pub fn is_prayer(&self) -> bool {
        !matches!(self, Prayer::Sunrise)
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name_en())
    }
}

/// The six clock times for one calendar day.
///
/// Invariant: times are non-decreasing in canonical order (Fajr earliest,
/// Isha latest). The resolver relies on providers for this; it is asserted
/// in tests, not enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub fajr: ClockTime,
    pub sunrise: ClockTime,
    pub dhuhr: ClockTime,
    pub asr: ClockTime,
    pub maghrib: ClockTime,
    pub isha: ClockTime,
}

impl PrayerTimes {
    pub fn get(&self, prayer: Prayer) -> ClockTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Iterates the slots in canonical day order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, ClockTime)> + '_ {
        Prayer::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// True when the times are non-decreasing in canonical order.
    pub fn is_ordered(&self) -> bool {
        Prayer::ALL
            .windows(2)
            .all(|w| self.get(w[0]) <= self.get(w[1]))
    }
}
