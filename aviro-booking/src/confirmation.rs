use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use aviro_cabin::{compute_total, Seat, SeatPreferences};

use crate::session::BookingDraft;

/// Everything the confirmation sink needs for a completed booking.
///
/// The engine only assembles this payload; persistence, payment and
/// delivery are the sink's problem.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub seats: Vec<Seat>,
    pub preferences: SeatPreferences,
    pub total: f64,
}

impl BookingConfirmation {
    pub(crate) fn assemble(date: NaiveDate, draft: &BookingDraft) -> Self {
        BookingConfirmation {
            reference: Uuid::new_v4(),
            from: draft.flight.from.clone(),
            to: draft.flight.to.clone(),
            date,
            seats: draft.seats.clone(),
            preferences: draft.preferences,
            total: compute_total(draft.flight.price, draft.ticket_count, &draft.seats),
        }
    }

    /// Human-readable confirmation message for the summary dialog.
    pub fn summary(&self) -> String {
        let seats = self
            .seats
            .iter()
            .map(Seat::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Booked!\nFlight: {} → {}\nDate: {}\nSeats: {}\nPreferences: {}\n\nTotal: €{}",
            self.from,
            self.to,
            self.date.format("%d.%m.%Y"),
            seats,
            describe_preferences(&self.preferences),
            self.total,
        )
    }
}

fn describe_preferences(preferences: &SeatPreferences) -> String {
    if preferences.none_active() {
        return "none".to_string();
    }
    let mut active = Vec::new();
    if preferences.together {
        active.push("together");
    }
    if preferences.window {
        active.push("window");
    }
    if preferences.legroom {
        active.push("legroom");
    }
    active.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use aviro_core::FlightRecord;

    fn draft() -> BookingDraft {
        BookingDraft {
            flight: FlightRecord {
                from: "Tallinn".into(),
                to: "London".into(),
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                time: "08:15".into(),
                duration: "2h 50m".into(),
                price: 100.0,
            },
            ticket_count: 2,
            seats: vec!["1A".parse().unwrap(), "1B".parse().unwrap()],
            preferences: SeatPreferences {
                window: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn totals_include_legroom_surcharge() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let confirmation = BookingConfirmation::assemble(date, &draft());
        assert_eq!(confirmation.total, 230.0);
    }

    #[test]
    fn summary_reads_like_the_dialog() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let summary = BookingConfirmation::assemble(date, &draft()).summary();
        assert!(summary.contains("Tallinn → London"));
        assert!(summary.contains("Date: 01.06.2025"));
        assert!(summary.contains("Seats: 1A, 1B"));
        assert!(summary.contains("Preferences: window"));
        assert!(summary.contains("Total: €230"));
    }

    #[test]
    fn describes_inactive_preferences_as_none() {
        assert_eq!(describe_preferences(&SeatPreferences::default()), "none");
    }

    #[test]
    fn serializes_for_the_confirmation_sink() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let confirmation = BookingConfirmation::assemble(date, &draft());
        let json = serde_json::to_value(&confirmation).unwrap();
        assert_eq!(json["seats"], serde_json::json!(["1A", "1B"]));
        assert_eq!(json["total"], serde_json::json!(230.0));
        assert_eq!(json["date"], serde_json::json!("2025-06-01"));
    }
}
