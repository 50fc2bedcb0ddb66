//! Fetches and prints today's timings for Cairo, then the next prayer.
//!
//! Run with: `cargo run --example today`

use chrono::Local;
use mawaqit::prelude::*;

#[tokio::main]
async fn main() -> Result<(), ResolveError> {
    let resolver = SmartPrayerTimes::with_defaults()?;
    let cairo = Coordinate::new_unchecked(30.0444, 31.2357);

    let resolved = resolver.get_prayer_times(cairo).await;
    println!(
        "{} {} {} / {} {} ({})",
        resolved.date.gregorian.day,
        resolved.date.gregorian.month_en,
        resolved.date.gregorian.year,
        resolved.date.hijri.day,
        resolved.date.hijri.month_ar,
        resolved.source,
    );
    for (prayer, time) in resolved.times.iter() {
        println!("{:<8} {:<8} {}", prayer.name_en(), prayer.name_ar(), time);
    }

    let next = next_prayer(&resolved.times, Local::now().time(), false);
    println!("next: {next}");
    Ok(())
}
