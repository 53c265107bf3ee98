pub mod catalog;
pub mod duration;
pub mod flight;

pub use catalog::{destinations, select, FilterCriteria, SortKey};
pub use duration::{Arrival, ClockTime, DurationMinutes};
pub use flight::FlightRecord;
