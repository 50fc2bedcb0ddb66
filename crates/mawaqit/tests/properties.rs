use chrono::NaiveTime;
use mawaqit::prelude::*;
use proptest::prelude::*;

fn clock_from_minutes(minutes: u32) -> ClockTime {
    ClockTime::new_unchecked((minutes / 60) as u8, (minutes % 60) as u8)
}

fn times_from_sorted(mut minutes: [u32; 6]) -> PrayerTimes {
    minutes.sort_unstable();
    PrayerTimes {
        fajr: clock_from_minutes(minutes[0]),
        sunrise: clock_from_minutes(minutes[1]),
        dhuhr: clock_from_minutes(minutes[2]),
        asr: clock_from_minutes(minutes[3]),
        maghrib: clock_from_minutes(minutes[4]),
        isha: clock_from_minutes(minutes[5]),
    }
}

proptest! {
    /// Invariant: the parser never panics, whatever the provider sends.
    #[test]
    fn no_panic_parse_invariant(raw in "\\PC*") {
        let _ = ClockTime::parse(&raw);
    }

    /// Invariant: display/parse round-trips for every valid time.
    #[test]
    fn display_parse_round_trip(hour in 0u8..24, minute in 0u8..60) {
        let time = ClockTime::new(hour, minute).unwrap();
        let back = ClockTime::parse(&time.to_string()).unwrap();
        prop_assert_eq!(back, time);
    }

    /// Invariant: trailing annotations never change the parsed value.
    #[test]
    fn suffix_is_ignored(hour in 0u8..24, minute in 0u8..60, suffix in " \\(\\PC{0,12}\\)") {
        let bare = format!("{hour:02}:{minute:02}");
        let annotated = format!("{bare}{suffix}");
        prop_assert_eq!(ClockTime::parse(&annotated).unwrap(), ClockTime::parse(&bare).unwrap());
    }

    /// Invariant: the countdown is always positive and under 24 hours.
    #[test]
    fn countdown_is_bounded(
        minutes in prop::array::uniform6(0u32..1440),
        probe_secs in 0u32..86_400,
        include_sunrise in any::<bool>(),
    ) {
        let times = times_from_sorted(minutes);
        let probe = NaiveTime::from_num_seconds_from_midnight_opt(probe_secs, 0).unwrap();
        let next = next_prayer(&times, probe, include_sunrise);
        prop_assert!(next.remaining_seconds > 0);
        prop_assert!(next.remaining_seconds <= 86_400);
    }

    /// Invariant: sorted inputs always produce an ordered record.
    #[test]
    fn sorted_times_are_ordered(minutes in prop::array::uniform6(0u32..1440)) {
        prop_assert!(times_from_sorted(minutes).is_ordered());
    }
}
