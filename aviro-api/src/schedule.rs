use chrono::NaiveDate;
use rand::Rng;

use aviro_core::FlightRecord;

/// Every flight departs from the home airport.
pub const ORIGIN: &str = "Tallinn";

pub const FLIGHTS_PER_DAY: usize = 20;

const DESTINATIONS: [&str; 8] = [
    "London",
    "Paris",
    "Berlin",
    "Oslo",
    "Helsinki",
    "Rome",
    "Amsterdam",
    "Vienna",
];

const TIMES: [&str; 10] = [
    "06:00", "08:15", "09:30", "11:45", "13:00", "14:20", "16:40", "18:10", "20:00", "22:30",
];

// "3h" deliberately has no minutes component; the duration codec treats
// the missing part as zero.
const DURATIONS: [&str; 6] = ["2h 10m", "2h 30m", "3h", "2h 50m", "1h 45m", "2h 15m"];

/// Draw the day's schedule: twenty flights from the home airport with
/// destination, time, duration and price picked independently at random.
/// There is no inventory behind this; the same date yields a different
/// schedule on every call.
pub fn generate<R: Rng>(date: NaiveDate, rng: &mut R) -> Vec<FlightRecord> {
    (0..FLIGHTS_PER_DAY)
        .map(|_| FlightRecord {
            from: ORIGIN.to_string(),
            to: DESTINATIONS[rng.gen_range(0..DESTINATIONS.len())].to_string(),
            date,
            time: TIMES[rng.gen_range(0..TIMES.len())].to_string(),
            duration: DURATIONS[rng.gen_range(0..DURATIONS.len())].to_string(),
            price: f64::from(rng.gen_range(50..250)),
        })
        .collect()
}
