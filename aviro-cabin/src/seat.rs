use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of seat rows in the fixed cabin layout.
pub const CABIN_ROWS: u8 = 15;

/// The single extra-legroom row; choosing a seat here carries a surcharge.
pub const LEGROOM_ROW: u8 = 1;

/// Seat column. A-C sit left of the aisle, D-F right of it; A and F are
/// the window columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
    ];

    pub fn letter(self) -> char {
        match self {
            Column::A => 'A',
            Column::B => 'B',
            Column::C => 'C',
            Column::D => 'D',
            Column::E => 'E',
            Column::F => 'F',
        }
    }

    pub fn from_letter(c: char) -> Option<Column> {
        match c {
            'A' => Some(Column::A),
            'B' => Some(Column::B),
            'C' => Some(Column::C),
            'D' => Some(Column::D),
            'E' => Some(Column::E),
            'F' => Some(Column::F),
            _ => None,
        }
    }

    pub fn is_window(self) -> bool {
        matches!(self, Column::A | Column::F)
    }

    /// Column one step towards A. Seat adjacency ignores the aisle, so
    /// C and D count as neighbors; only the A and F edges have none.
    pub fn left(self) -> Option<Column> {
        match self {
            Column::A => None,
            Column::B => Some(Column::A),
            Column::C => Some(Column::B),
            Column::D => Some(Column::C),
            Column::E => Some(Column::D),
            Column::F => Some(Column::E),
        }
    }

    /// Column one step towards F.
    pub fn right(self) -> Option<Column> {
        match self {
            Column::A => Some(Column::B),
            Column::B => Some(Column::C),
            Column::C => Some(Column::D),
            Column::D => Some(Column::E),
            Column::E => Some(Column::F),
            Column::F => None,
        }
    }
}

/// A seat coordinate, displayed as `"<row><letter>"` (e.g. `"1A"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat {
    row: u8,
    column: Column,
}

impl Seat {
    pub fn new(row: u8, column: Column) -> Option<Seat> {
        if (1..=CABIN_ROWS).contains(&row) {
            Some(Seat { row, column })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn column(self) -> Column {
        self.column
    }

    pub fn is_window(self) -> bool {
        self.column.is_window()
    }

    pub fn has_extra_legroom(self) -> bool {
        self.row == LEGROOM_ROW
    }

    pub fn left_neighbor(self) -> Option<Seat> {
        self.column.left().map(|column| Seat { column, ..self })
    }

    pub fn right_neighbor(self) -> Option<Seat> {
        self.column.right().map(|column| Seat { column, ..self })
    }

    /// All seats in the cabin, row-major.
    pub fn all() -> impl Iterator<Item = Seat> {
        (1..=CABIN_ROWS)
            .flat_map(|row| Column::ALL.into_iter().map(move |column| Seat { row, column }))
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat id: {0:?}")]
pub struct SeatParseError(pub String);

impl FromStr for Seat {
    type Err = SeatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SeatParseError(s.to_string());
        let mut chars = s.chars();
        let letter = chars.next_back().ok_or_else(invalid)?;
        let column = Column::from_letter(letter).ok_or_else(invalid)?;
        let row: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        Seat::new(row, column).ok_or_else(invalid)
    }
}

// Seats cross the wire as their display ids ("1A"), matching the seat map
// payload the frontend renders.
impl Serialize for Seat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Seat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_ids() {
        let seat: Seat = "12C".parse().unwrap();
        assert_eq!(seat.row(), 12);
        assert_eq!(seat.column(), Column::C);
        assert_eq!(seat.to_string(), "12C");
    }

    #[test]
    fn rejects_bad_ids() {
        for bad in ["", "A", "0A", "16A", "3G", "3a", "x9"] {
            assert!(bad.parse::<Seat>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn window_and_legroom_predicates() {
        assert!("3A".parse::<Seat>().unwrap().is_window());
        assert!("3F".parse::<Seat>().unwrap().is_window());
        assert!(!"3C".parse::<Seat>().unwrap().is_window());
        assert!("1D".parse::<Seat>().unwrap().has_extra_legroom());
        assert!(!"2A".parse::<Seat>().unwrap().has_extra_legroom());
    }

    #[test]
    fn neighbors_stop_at_the_cabin_walls() {
        let a: Seat = "5A".parse().unwrap();
        assert_eq!(a.left_neighbor(), None);
        assert_eq!(a.right_neighbor(), Some("5B".parse().unwrap()));

        let f: Seat = "5F".parse().unwrap();
        assert_eq!(f.right_neighbor(), None);
        assert_eq!(f.left_neighbor(), Some("5E".parse().unwrap()));

        // Adjacency crosses the aisle.
        let c: Seat = "5C".parse().unwrap();
        assert_eq!(c.right_neighbor(), Some("5D".parse().unwrap()));
    }

    #[test]
    fn cabin_holds_ninety_seats() {
        assert_eq!(Seat::all().count(), 90);
    }

    #[test]
    fn serializes_as_display_id() {
        let seat: Seat = "1F".parse().unwrap();
        assert_eq!(serde_json::to_string(&seat).unwrap(), "\"1F\"");
        let back: Seat = serde_json::from_str("\"1F\"").unwrap();
        assert_eq!(back, seat);
    }
}
