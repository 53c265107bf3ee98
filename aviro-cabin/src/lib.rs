pub mod map;
pub mod pricing;
pub mod recommend;
pub mod seat;

pub use map::{SeatMap, FREE_PROBABILITY};
pub use pricing::{compute_total, LEGROOM_SURCHARGE};
pub use recommend::{is_recommended, SeatPreferences};
pub use seat::{Column, Seat, SeatParseError, CABIN_ROWS, LEGROOM_ROW};
