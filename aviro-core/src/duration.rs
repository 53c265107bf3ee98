use std::fmt;

use serde::{Deserialize, Serialize};

/// A flight duration in whole minutes.
///
/// The wire format is the compact `"<h>h <m>m"` string the schedule feed
/// uses. Parsing happens once at the boundary; all arithmetic is done on
/// the integer minute count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DurationMinutes(pub u32);

impl DurationMinutes {
    /// Parse a duration like `"2h 30m"`. Either component may be absent
    /// (`"3h"`, `"45m"`) and contributes zero. A string with neither
    /// component degrades to zero minutes rather than failing, so a bad
    /// feed entry never blocks rendering.
    pub fn parse(s: &str) -> Self {
        let hours = component(s, b'h');
        let minutes = component(s, b'm');
        if hours.is_none() && minutes.is_none() {
            tracing::debug!(input = s, "duration string had no parseable components");
        }
        DurationMinutes(hours.unwrap_or(0) * 60 + minutes.unwrap_or(0))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

/// First run of digits immediately followed by `suffix`.
fn component(s: &str, suffix: u8) -> Option<u32> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == suffix && i > 0 && bytes[i - 1].is_ascii_digit() {
            let mut start = i;
            while start > 0 && bytes[start - 1].is_ascii_digit() {
                start -= 1;
            }
            return s[start..i].parse().ok();
        }
    }
    None
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.0 / 60, self.0 % 60)
    }
}

/// A clock time as minutes since midnight, always `< 1440`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime(u32);

impl ClockTime {
    pub fn from_minutes(minutes: u32) -> Self {
        ClockTime(minutes % 1440)
    }

    /// Parse a zero-padded `HH:MM` string. An unparseable component
    /// contributes zero, mirroring the duration codec's degradation.
    pub fn parse(s: &str) -> Self {
        let (h, m) = s.split_once(':').unwrap_or((s, ""));
        let hours: u32 = h.trim().parse().unwrap_or(0);
        let minutes: u32 = m.trim().parse().unwrap_or(0);
        ClockTime::from_minutes(hours * 60 + minutes)
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.0
    }

    /// Arrival clock value and day offset after flying for `duration`.
    pub fn after(self, duration: DurationMinutes) -> Arrival {
        let total = self.0 + duration.minutes();
        Arrival {
            time: ClockTime::from_minutes(total),
            day_offset: total / 1440,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// An arrival time together with the number of calendar days it lands
/// past the departure day. Displays as `"HH:MM"`, or `"HH:MM (+N)"` when
/// the flight crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    pub time: ClockTime,
    pub day_offset: u32,
}

impl fmt::Display for Arrival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.day_offset > 0 {
            write!(f, "{} (+{})", self.time, self.day_offset)
        } else {
            write!(f, "{}", self.time)
        }
    }
}
