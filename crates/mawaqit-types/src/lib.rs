//! Core types for the mawaqit prayer-times resolution service.
//!
//! Everything here is a plain value object: coordinates, wall-clock times,
//! the six-slot daily timings record, and the resolved snapshots that the
//! network and cache crates move around.

pub mod coordinate;
pub mod date;
pub mod prayer;
pub mod schedule;
pub mod time;

pub use coordinate::Coordinate;
pub use date::{
    DateInfo, FALLBACK_SOURCE, GregorianDateInfo, HijriDateInfo, MonthlyDay, ResolvedResult,
};
pub use prayer::{Prayer, PrayerTimes};
pub use schedule::{NextPrayer, next_prayer};
pub use time::{ClockTime, TimeParseError};
