use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A time string that could not be parsed as `HH:MM`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid clock time {0:?}")]
pub struct TimeParseError(pub String);

/// A 24-hour wall-clock time at minute precision.
///
/// Upstream providers return times as strings with trailing annotations
/// (`"05:15 (EET)"`); [`ClockTime::parse`] truncates to the leading `HH:MM`.
/// Displays and serializes as exactly `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a clock time, or `None` if out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }

    /// Creates a clock time without range validation.
    pub const fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Parses a time string, tolerating trailing annotations.
    ///
    /// Only the first five characters carry the time; everything after is
    /// provider decoration (timezone suffixes and the like).
    ///
    /// # Errors
    /// Returns [`TimeParseError`] if the leading characters are not a valid
    /// 24-hour `HH:MM`.
    pub fn parse(raw: &str) -> Result<Self, TimeParseError> {
        let head: String = raw.trim().chars().take(5).collect();
        let invalid = || TimeParseError(raw.to_string());
        let (h, m) = head.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.trim().parse().map_err(|_| invalid())?;
        let minute: u8 = m.trim().parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight, 0..1440.
    pub fn minutes_from_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Seconds elapsed since midnight, 0..86400.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.minutes_from_midnight() * 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
