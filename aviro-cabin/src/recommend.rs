use serde::{Deserialize, Serialize};

use crate::map::SeatMap;
use crate::seat::Seat;

/// Passenger seat preferences. All three are independent toggles;
/// `together` only takes effect for a party of exactly two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPreferences {
    pub together: bool,
    pub window: bool,
    pub legroom: bool,
}

impl SeatPreferences {
    pub fn none_active(&self) -> bool {
        !(self.together || self.window || self.legroom)
    }
}

/// Whether a seat should be highlighted as matching the passenger's
/// preferences.
///
/// An unavailable seat is never recommended. Each active preference is an
/// independent veto: legroom requires the extra-legroom row, window
/// requires column A or F, and together (for a party of two) requires at
/// least one free adjacent seat in the same row. Edge columns have only
/// one neighbor, so a lone free edge seat fails the together check. With
/// no active preferences, recommendation equals availability.
pub fn is_recommended(
    seat: Seat,
    map: &SeatMap,
    preferences: &SeatPreferences,
    ticket_count: u8,
) -> bool {
    if !map.is_free(seat) {
        return false;
    }
    if preferences.legroom && !seat.has_extra_legroom() {
        return false;
    }
    if preferences.window && !seat.is_window() {
        return false;
    }
    if preferences.together && ticket_count == 2 {
        let left_free = seat.left_neighbor().is_some_and(|n| map.is_free(n));
        let right_free = seat.right_neighbor().is_some_and(|n| map.is_free(n));
        if !left_free && !right_free {
            return false;
        }
    }
    true
}
