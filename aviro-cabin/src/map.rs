use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::seat::Seat;

/// Probability that any one seat comes up free in a fresh map.
pub const FREE_PROBABILITY: f64 = 0.7;

/// Per-seat availability for one booking attempt.
///
/// Availability is ephemeral: a fresh map is generated every time the
/// seat map is shown, and nothing carries over between generations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    free: BTreeMap<Seat, bool>,
}

impl SeatMap {
    /// Draw a fresh availability map, each seat independently free with
    /// [`FREE_PROBABILITY`]. The caller supplies the RNG so tests can
    /// drive the draw with a seeded source.
    pub fn generate<R: Rng>(rng: &mut R) -> SeatMap {
        SeatMap::from_fn(|_| rng.gen_bool(FREE_PROBABILITY))
    }

    /// Build a map from an explicit availability predicate.
    pub fn from_fn(mut is_free: impl FnMut(Seat) -> bool) -> SeatMap {
        SeatMap {
            free: Seat::all().map(|seat| (seat, is_free(seat))).collect(),
        }
    }

    pub fn is_free(&self, seat: Seat) -> bool {
        self.free.get(&seat).copied().unwrap_or(false)
    }

    /// All seats with their availability, row-major.
    pub fn seats(&self) -> impl Iterator<Item = (Seat, bool)> + '_ {
        self.free.iter().map(|(&seat, &free)| (seat, free))
    }
}
