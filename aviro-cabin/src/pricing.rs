use crate::seat::Seat;

/// Surcharge, in currency units, for each chosen extra-legroom seat.
pub const LEGROOM_SURCHARGE: f64 = 15.0;

/// Total price for a booking: base fare per ticket plus the legroom
/// surcharge for every chosen seat in the extra-legroom row.
///
/// The surcharge keys off which seats were physically chosen, never off
/// the legroom preference toggle.
pub fn compute_total(base_price: f64, ticket_count: u8, chosen_seats: &[Seat]) -> f64 {
    let legroom_seats = chosen_seats
        .iter()
        .filter(|seat| seat.has_extra_legroom())
        .count();
    base_price * f64::from(ticket_count) + LEGROOM_SURCHARGE * legroom_seats as f64
}
