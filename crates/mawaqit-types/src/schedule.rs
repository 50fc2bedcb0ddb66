//! Next-prayer selection and countdown math for live widgets.

use crate::prayer::{Prayer, PrayerTimes};
use chrono::{NaiveTime, Timelike};
use std::fmt;

const SECONDS_PER_DAY: u32 = 86_400;

/// The upcoming prayer and the time left until it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub remaining_seconds: u32,
}

impl NextPrayer {
    /// Formats the remaining time as `HH:MM:SS`.
    pub fn countdown(&self) -> String {
        let h = self.remaining_seconds / 3600;
        let m = (self.remaining_seconds % 3600) / 60;
        let s = self.remaining_seconds % 60;
        format!("{h:02}:{m:02}:{s:02}")
    }
}

impl fmt::Display for NextPrayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.prayer, self.countdown())
    }
}

/// Returns the first slot whose time strictly exceeds `now`, in canonical
/// order. Past Isha the answer wraps to Fajr of the following day, with the
/// remaining time crossing midnight.
///
/// `include_sunrise` controls whether Sunrise is a candidate; the consuming
/// widgets disagree on this, so the choice is theirs.
pub fn next_prayer(times: &PrayerTimes, now: NaiveTime, include_sunrise: bool) -> NextPrayer {
    let now_secs = now.num_seconds_from_midnight();
    for (prayer, time) in times.iter() {
        if prayer == Prayer::Sunrise && !include_sunrise {
            continue;
        }
        let target = time.seconds_from_midnight();
        if target > now_secs {
            return NextPrayer {
                prayer,
                remaining_seconds: target - now_secs,
            };
        }
    }
    NextPrayer {
        prayer: Prayer::Fajr,
        remaining_seconds: (SECONDS_PER_DAY - now_secs) + times.fajr.seconds_from_midnight(),
    }
}
