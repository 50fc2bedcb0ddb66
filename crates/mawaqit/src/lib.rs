//! # Mawaqit
//!
//! Prayer-times resolution for display surfaces that must never go blank:
//! an ordered provider fallback chain ending in a fixed default set, a local
//! TTL cache keyed by rounded coordinates, and bilingual (Arabic/English)
//! calendar labels.
//!
//! This crate is a facade that re-exports the `mawaqit` ecosystem.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mawaqit::prelude::*;
//!
//! # async fn run() -> Result<(), mawaqit::ResolveError> {
//! let cache = PrayerTimesCache::new(MemoryStore::new());
//! let resolver = SmartPrayerTimes::with_defaults()?;
//! let cairo = Coordinate::new(30.0444, 31.2357).unwrap();
//!
//! let resolved = match cache.get(cairo) {
//!     Some(hit) => hit,
//!     None => {
//!         let fresh = resolver.get_prayer_times(cairo).await;
//!         cache.set(cairo, &fresh);
//!         fresh
//!     }
//! };
//! println!("Fajr: {} ({})", resolved.times.fajr, resolved.source);
//! # Ok(())
//! # }
//! ```

pub use mawaqit_calendar as calendar;
pub use mawaqit_cache::{CacheStore, JsonFileStore, MemoryStore, PrayerTimesCache};
pub use mawaqit_network::{
    ALADHAN_BASE_URL, HttpProvider, ResolveError, SmartPrayerTimes, default_times,
};
pub use mawaqit_types::{
    ClockTime, Coordinate, DateInfo, FALLBACK_SOURCE, GregorianDateInfo, HijriDateInfo,
    MonthlyDay, NextPrayer, Prayer, PrayerTimes, ResolvedResult, TimeParseError, next_prayer,
};

pub mod prelude {
    pub use crate::{
        ClockTime, Coordinate, DateInfo, HttpProvider, MemoryStore, MonthlyDay, NextPrayer,
        Prayer, PrayerTimes, PrayerTimesCache, ResolveError, ResolvedResult, SmartPrayerTimes,
        next_prayer,
    };
}
