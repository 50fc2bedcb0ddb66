//! Network layer of the mawaqit prayer-times service.
//!
//! [`SmartPrayerTimes`] walks an ordered chain of [`HttpProvider`]s and
//! guarantees the daily path always produces something renderable, while the
//! monthly path surfaces failure explicitly.

mod error;
mod provider;
mod resolver;

pub use error::{ProviderError, ResolveError};
pub use provider::{ALADHAN_BASE_URL, DEFAULT_TIMEOUT_SECS, HttpProvider};
pub use resolver::{SmartPrayerTimes, default_times};
