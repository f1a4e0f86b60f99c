//! Leg assignment extraction
//!
//! A relay row names a rider in each `Leg i` cell it used and records lap
//! times in the `Lap i` cells. Legs and laps are paired by position, not by
//! column number: the n-th assigned leg takes the n-th `Lap` column. Lap cells
//! past the number of assigned legs are ignored.

use crate::types::{Cell, ColumnRole, RowView};

/// One assigned leg of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegAssignment {
    /// Number of the `Leg i` column the rider was read from
    pub leg_index: usize,
    pub rider: String,
    /// Text of the positionally paired `Lap` cell, `None` when it is missing
    pub raw_lap_time: Option<String>,
}

/// Extract the ordered leg assignments of a row.
pub fn extract_leg_assignments(row: &RowView<'_>) -> Vec<LegAssignment> {
    let laps = row.numbered(ColumnRole::Lap);
    let mut laps = laps.into_iter().map(|(_, cell)| cell);

    row.numbered(ColumnRole::Leg)
        .into_iter()
        .filter_map(|(leg_index, cell)| match cell {
            Cell::Missing => None,
            Cell::Value(rider) => Some((leg_index, rider)),
        })
        .map(|(leg_index, rider)| LegAssignment {
            leg_index,
            rider: rider.clone(),
            raw_lap_time: laps.next().and_then(Cell::as_str).map(str::to_string),
        })
        .collect()
}

/// Whether every assignment names the same rider. An empty list counts as a
/// single rider.
pub fn is_single_rider(legs: &[LegAssignment]) -> bool {
    match legs.split_first() {
        None => true,
        Some((first, rest)) => rest.iter().all(|leg| leg.rider == first.rider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResultRow, ResultsSchema, ResultsTable};

    fn table(headers: &[&str], values: &[&str]) -> ResultsTable {
        let schema = ResultsSchema::from_headers(headers).unwrap();
        ResultsTable::with_rows(
            schema,
            vec![ResultRow::new(values.iter().map(|v| Cell::parse(v)).collect())],
        )
    }

    const HEADERS: &[&str] = &[
        "Category", "Team name", "Time", "Start", "Leg 1", "Lap 1", "Leg 2", "Lap 2", "Leg 3",
        "Lap 3",
    ];

    #[test]
    fn pairs_valid_legs_with_leading_laps() {
        let table = table(
            HEADERS,
            &["Solo", "T", "x", "s", "Ann", "10:00.0", "-", "12:00.0", "Bob", "11:00.0"],
        );
        let legs = extract_leg_assignments(&table.view(0).unwrap());

        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].leg_index, 1);
        assert_eq!(legs[0].rider, "Ann");
        assert_eq!(legs[0].raw_lap_time.as_deref(), Some("10:00.0"));
        // Second valid leg is Leg 3 but takes the second Lap column.
        assert_eq!(legs[1].leg_index, 3);
        assert_eq!(legs[1].rider, "Bob");
        assert_eq!(legs[1].raw_lap_time.as_deref(), Some("12:00.0"));
    }

    #[test]
    fn missing_lap_is_reported_as_none() {
        let table = table(HEADERS, &["Solo", "T", "x", "s", "Ann", "", "Bob", "12:00.0"]);
        let legs = extract_leg_assignments(&table.view(0).unwrap());
        assert_eq!(legs[0].raw_lap_time, None);
        assert_eq!(legs[1].raw_lap_time.as_deref(), Some("12:00.0"));
    }

    #[test]
    fn more_legs_than_lap_columns() {
        let table = table(
            &["Category", "Team name", "Time", "Start", "Leg 1", "Leg 2", "Lap 1"],
            &["Solo", "T", "x", "s", "Ann", "Bob", "10:00.0"],
        );
        let legs = extract_leg_assignments(&table.view(0).unwrap());
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[1].raw_lap_time, None);
    }

    #[test]
    fn single_rider_detection() {
        let leg = |rider: &str| LegAssignment {
            leg_index: 1,
            rider: rider.to_string(),
            raw_lap_time: None,
        };
        assert!(is_single_rider(&[]));
        assert!(is_single_rider(&[leg("Ann"), leg("Ann"), leg("Ann")]));
        assert!(!is_single_rider(&[leg("Ann"), leg("Bob"), leg("Ann")]));
    }
}
