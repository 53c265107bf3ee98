use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::flight::FlightRecord;

/// Filters applied to the flight list before sorting.
///
/// An empty `allowed_destinations` set means "no restriction", not
/// "exclude everything".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub max_duration_minutes: u32,
    pub allowed_destinations: BTreeSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        // The duration slider starts fully open at six hours.
        Self {
            max_duration_minutes: 360,
            allowed_destinations: BTreeSet::new(),
        }
    }
}

/// Exactly one sort key is active at a time. Ties keep the feed's order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Departure time, ascending. Lexical compare is valid because the
    /// feed always zero-pads `HH:MM`.
    #[default]
    #[serde(rename = "time")]
    Time,
    PriceAsc,
    PriceDesc,
    DurationAsc,
    DurationDesc,
}

/// The visible, ordered subset of the flight list.
///
/// Retains flights within the duration cap, then (if any destinations are
/// selected) those flying to a selected destination, then orders by the
/// sort key. The input list is untouched.
pub fn select(
    flights: &[FlightRecord],
    criteria: &FilterCriteria,
    sort_key: SortKey,
) -> Vec<FlightRecord> {
    let mut visible: Vec<FlightRecord> = flights
        .iter()
        .filter(|f| f.duration_minutes().minutes() <= criteria.max_duration_minutes)
        .filter(|f| {
            criteria.allowed_destinations.is_empty()
                || criteria.allowed_destinations.contains(&f.to)
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, which preserves feed order for equal keys.
    visible.sort_by(|a, b| match sort_key {
        SortKey::Time => a.time.cmp(&b.time),
        SortKey::PriceAsc => a.price.total_cmp(&b.price),
        SortKey::PriceDesc => b.price.total_cmp(&a.price),
        SortKey::DurationAsc => a.duration_minutes().cmp(&b.duration_minutes()),
        SortKey::DurationDesc => b.duration_minutes().cmp(&a.duration_minutes()),
    });
    visible
}

/// Sorted unique destinations across the *unfiltered* list.
///
/// The filter checkboxes are built from this, so applying a filter never
/// shrinks the set of destinations offered.
pub fn destinations(flights: &[FlightRecord]) -> Vec<String> {
    let unique: BTreeSet<&str> = flights.iter().map(|f| f.to.as_str()).collect();
    unique.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn flight(to: &str, time: &str, duration: &str, price: f64) -> FlightRecord {
        FlightRecord {
            from: "Tallinn".into(),
            to: to.into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: time.into(),
            duration: duration.into(),
            price,
        }
    }

    fn sample() -> Vec<FlightRecord> {
        vec![
            flight("London", "13:00", "2h 50m", 120.0),
            flight("Oslo", "06:00", "1h 45m", 90.0),
            flight("Paris", "09:30", "3h 0m", 150.0),
            flight("Oslo", "20:00", "1h 45m", 60.0),
        ]
    }

    #[test]
    fn respects_duration_cap() {
        let criteria = FilterCriteria {
            max_duration_minutes: 120,
            ..Default::default()
        };
        let visible = select(&sample(), &criteria, SortKey::Time);
        assert_eq!(visible.len(), 2);
        assert!(visible
            .iter()
            .all(|f| f.duration_minutes().minutes() <= 120));
    }

    #[test]
    fn empty_destination_set_is_unrestricted() {
        let visible = select(&sample(), &FilterCriteria::default(), SortKey::Time);
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn destination_filter_retains_members_only() {
        let criteria = FilterCriteria {
            allowed_destinations: ["Oslo".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let visible = select(&sample(), &criteria, SortKey::Time);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|f| f.to == "Oslo"));
    }

    #[test]
    fn sorts_by_departure_time() {
        let visible = select(&sample(), &FilterCriteria::default(), SortKey::Time);
        let times: Vec<&str> = visible.iter().map(|f| f.time.as_str()).collect();
        assert_eq!(times, ["06:00", "09:30", "13:00", "20:00"]);
    }

    #[test]
    fn sorts_by_price_both_ways() {
        let asc = select(&sample(), &FilterCriteria::default(), SortKey::PriceAsc);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

        let desc = select(&sample(), &FilterCriteria::default(), SortKey::PriceDesc);
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn sorts_by_duration_and_keeps_feed_order_on_ties() {
        let visible = select(&sample(), &FilterCriteria::default(), SortKey::DurationAsc);
        // The two 1h 45m Oslo flights tie; the 06:00 one came first in the feed.
        assert_eq!(visible[0].time, "06:00");
        assert_eq!(visible[1].time, "20:00");
        assert!(visible
            .windows(2)
            .all(|w| w[0].duration_minutes() <= w[1].duration_minutes()));
    }

    #[test]
    fn input_list_is_untouched() {
        let flights = sample();
        let before = flights.clone();
        let _ = select(&flights, &FilterCriteria::default(), SortKey::PriceDesc);
        assert_eq!(flights, before);
    }

    #[test]
    fn destination_choices_come_from_the_unfiltered_list() {
        assert_eq!(destinations(&sample()), ["London", "Oslo", "Paris"]);
    }

    #[test]
    fn sort_key_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&SortKey::PriceAsc).unwrap(),
            "\"priceAsc\""
        );
        assert_eq!(
            serde_json::from_str::<SortKey>("\"time\"").unwrap(),
            SortKey::Time
        );
    }
}
