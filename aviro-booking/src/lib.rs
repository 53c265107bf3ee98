pub mod confirmation;
pub mod session;

pub use confirmation::BookingConfirmation;
pub use session::{BookingDraft, BookingSession, SeatView, Stage, MAX_TICKETS, MIN_TICKETS};
