use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use aviro_cabin::{compute_total, is_recommended, Seat, SeatMap, SeatPreferences};
use aviro_core::{destinations, select, FilterCriteria, FlightRecord, SortKey};

use crate::confirmation::BookingConfirmation;

pub const MIN_TICKETS: u8 = 1;
pub const MAX_TICKETS: u8 = 6;

/// The in-progress booking for one chosen flight.
///
/// Invariant: `seats` is duplicate-free and never longer than
/// `ticket_count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub flight: FlightRecord,
    pub ticket_count: u8,
    pub seats: Vec<Seat>,
    pub preferences: SeatPreferences,
}

impl BookingDraft {
    fn new(flight: FlightRecord) -> Self {
        BookingDraft {
            flight,
            ticket_count: MIN_TICKETS,
            seats: Vec::new(),
            preferences: SeatPreferences::default(),
        }
    }
}

/// Where the user is in the booking flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    NoSelection,
    FlightChosen { draft: BookingDraft },
    SeatMapShown { draft: BookingDraft, map: SeatMap },
}

/// Per-seat rendering state for the seat map.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeatView {
    pub seat: Seat,
    pub available: bool,
    pub recommended: bool,
    pub selected: bool,
}

/// All mutable state for one search-and-book session.
///
/// Every user action is a transition method; invalid transitions leave
/// the session unchanged instead of erroring, so the caller can wire
/// actions straight to UI events without guarding each one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSession {
    date: NaiveDate,
    flights: Vec<FlightRecord>,
    criteria: FilterCriteria,
    sort_key: SortKey,
    stage: Stage,
}

impl BookingSession {
    pub fn new(date: NaiveDate) -> Self {
        BookingSession {
            date,
            flights: Vec::new(),
            criteria: FilterCriteria::default(),
            sort_key: SortKey::default(),
            stage: Stage::NoSelection,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Change the travel date. The flight list is stale until the next
    /// [`set_flights`](Self::set_flights); filters and sort survive.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Install a freshly fetched flight list. Responses are not guarded
    /// by request generation; the most recently resolved fetch wins.
    pub fn set_flights(&mut self, flights: Vec<FlightRecord>) {
        self.flights = flights;
    }

    // Filter and sort mutations.

    pub fn set_max_duration(&mut self, minutes: u32) {
        self.criteria.max_duration_minutes = minutes;
    }

    pub fn toggle_destination(&mut self, destination: &str) {
        if !self.criteria.allowed_destinations.remove(destination) {
            self.criteria
                .allowed_destinations
                .insert(destination.to_string());
        }
    }

    pub fn clear_destinations(&mut self) {
        self.criteria.allowed_destinations.clear();
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    /// The ordered flight list to display.
    pub fn visible_flights(&self) -> Vec<FlightRecord> {
        select(&self.flights, &self.criteria, self.sort_key)
    }

    /// Destination checkbox choices, always from the unfiltered list.
    pub fn destination_choices(&self) -> Vec<String> {
        destinations(&self.flights)
    }

    // Booking flow transitions.

    /// `NoSelection -> FlightChosen` with a fresh draft.
    pub fn choose_flight(&mut self, flight: FlightRecord) {
        if let Stage::NoSelection = self.stage {
            self.stage = Stage::FlightChosen {
                draft: BookingDraft::new(flight),
            };
        }
    }

    /// `FlightChosen -> NoSelection`, discarding the draft.
    pub fn cancel(&mut self) {
        if let Stage::FlightChosen { .. } = self.stage {
            self.stage = Stage::NoSelection;
        }
    }

    /// Adjust the party size while still on the flight details step.
    /// Out-of-range counts are ignored.
    pub fn set_ticket_count(&mut self, count: u8) {
        if !(MIN_TICKETS..=MAX_TICKETS).contains(&count) {
            tracing::debug!(count, "ignoring out-of-range ticket count");
            return;
        }
        if let Stage::FlightChosen { draft } = &mut self.stage {
            draft.ticket_count = count;
        }
    }

    pub fn set_preferences(&mut self, preferences: SeatPreferences) {
        if let Stage::FlightChosen { draft } = &mut self.stage {
            draft.preferences = preferences;
        }
    }

    /// `FlightChosen -> SeatMapShown`, drawing fresh availability.
    ///
    /// Availability never survives across showings, so any seats chosen
    /// on a previous visit to the map are dropped along with the old map.
    pub fn show_seat_map<R: Rng>(&mut self, rng: &mut R) {
        let Stage::FlightChosen { draft } = &self.stage else {
            return;
        };
        let mut draft = draft.clone();
        draft.seats.clear();
        self.stage = Stage::SeatMapShown {
            draft,
            map: SeatMap::generate(rng),
        };
    }

    /// `SeatMapShown -> FlightChosen`, keeping ticket count and
    /// preferences.
    pub fn back_to_details(&mut self) {
        let Stage::SeatMapShown { draft, .. } = &self.stage else {
            return;
        };
        let draft = draft.clone();
        self.stage = Stage::FlightChosen { draft };
    }

    /// Select or deselect a seat. Selecting is refused when the seat is
    /// taken or the party already has a seat per ticket.
    pub fn toggle_seat(&mut self, seat: Seat) {
        let Stage::SeatMapShown { draft, map } = &mut self.stage else {
            return;
        };
        if let Some(pos) = draft.seats.iter().position(|&s| s == seat) {
            draft.seats.remove(pos);
        } else if draft.seats.len() < usize::from(draft.ticket_count) && map.is_free(seat) {
            draft.seats.push(seat);
        } else {
            tracing::debug!(%seat, "seat selection rejected");
        }
    }

    /// The per-seat rendering state, or an empty list off the seat map.
    pub fn seat_views(&self) -> Vec<SeatView> {
        let Stage::SeatMapShown { draft, map } = &self.stage else {
            return Vec::new();
        };
        map.seats()
            .map(|(seat, available)| SeatView {
                seat,
                available,
                recommended: is_recommended(seat, map, &draft.preferences, draft.ticket_count),
                selected: draft.seats.contains(&seat),
            })
            .collect()
    }

    /// The running total for the summary panel, once a flight is chosen.
    pub fn running_total(&self) -> Option<f64> {
        match &self.stage {
            Stage::NoSelection => None,
            Stage::FlightChosen { draft } | Stage::SeatMapShown { draft, .. } => Some(
                compute_total(draft.flight.price, draft.ticket_count, &draft.seats),
            ),
        }
    }

    /// `SeatMapShown -> Completed -> NoSelection`, single-shot.
    ///
    /// Only permitted with exactly one chosen seat per ticket; otherwise
    /// the draft is left untouched and no confirmation is produced.
    pub fn complete(&mut self) -> Option<BookingConfirmation> {
        let Stage::SeatMapShown { draft, .. } = &self.stage else {
            return None;
        };
        if draft.seats.len() != usize::from(draft.ticket_count) {
            tracing::debug!(
                chosen = draft.seats.len(),
                tickets = draft.ticket_count,
                "completion refused: seat count does not match ticket count"
            );
            return None;
        }
        let confirmation = BookingConfirmation::assemble(self.date, draft);
        tracing::info!(reference = %confirmation.reference, "booking completed");
        self.stage = Stage::NoSelection;
        Some(confirmation)
    }
}
