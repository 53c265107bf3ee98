use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::duration::{Arrival, ClockTime, DurationMinutes};

/// One scheduled flight as delivered by the schedule feed.
///
/// The record carries no identity of its own; within a single fetch,
/// list position plus content is the only identity. `time` is zero-padded
/// `HH:MM` and `duration` is the compact `"<h>h <m>m"` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: String,
    pub price: f64,
}

impl FlightRecord {
    pub fn duration_minutes(&self) -> DurationMinutes {
        DurationMinutes::parse(&self.duration)
    }

    pub fn departure(&self) -> ClockTime {
        ClockTime::parse(&self.time)
    }

    /// Arrival clock time, with the day offset for red-eye flights.
    pub fn arrival(&self) -> Arrival {
        self.departure().after(self.duration_minutes())
    }
}
