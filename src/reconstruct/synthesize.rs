//! Rider row synthesis
//!
//! Turns one [`RiderGroup`] into the content of a new output row: identity
//! from the roster, a team label qualifying the rider with the original team
//! name, the source row's start, and the rider's laps renumbered from 1.

use tracing::debug;

use super::deltas::rider_relative_laps;
use super::timeline::RiderGroup;
use crate::roster::RosterIndex;
use crate::types::{Cell, RowView, START, TEAM_NAME};

/// One renumbered lap on a rider row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderLeg {
    pub rider: String,
    pub split: String,
    pub lap: String,
}

/// Content of a synthesized rider row, before it is laid out in columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderRow {
    pub bib: String,
    pub team_name: String,
    pub category: String,
    pub start: Cell,
    /// Placeholder, settled later by the status rewrite
    pub time: Cell,
    /// Laps in order; `legs[k]` fills `Leg k+1`, `Split k+1` and `Lap k+1`
    pub legs: Vec<RiderLeg>,
    /// Whether the rider was resolved from the roster
    pub in_roster: bool,
}

/// Builds rider rows against a read-only roster.
#[derive(Debug, Clone, Copy)]
pub struct RowSynthesizer<'a> {
    roster: &'a RosterIndex,
}

impl<'a> RowSynthesizer<'a> {
    pub fn new(roster: &'a RosterIndex) -> Self {
        Self { roster }
    }

    pub fn synthesize(&self, source: &RowView<'_>, group: &RiderGroup<'_>) -> RiderRow {
        let rider = group.rider();
        let identity = self.roster.lookup(rider);
        let entry = identity.entry();

        let team_name = match source.field(TEAM_NAME).as_str() {
            Some(team) => format!("{rider} ({team})"),
            None => rider.to_string(),
        };

        let legs: Vec<RiderLeg> = rider_relative_laps(group)
            .into_iter()
            .map(|lap| RiderLeg { rider: rider.to_string(), split: lap.split.to_string(), lap: lap.lap })
            .collect();

        let time = group.final_split().map(Cell::from).unwrap_or_default();

        debug!(
            row = source.number(),
            rider,
            laps = legs.len(),
            bib = %entry.bib,
            "Synthesized rider row"
        );

        RiderRow {
            bib: entry.bib.clone(),
            team_name,
            category: entry.category.clone(),
            start: source.field(START).clone(),
            time,
            legs,
            in_roster: identity.is_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NormalizeConfig;
    use crate::reconstruct::extract::extract_leg_assignments;
    use crate::reconstruct::timeline::Timeline;
    use crate::roster::RosterRecord;
    use crate::types::{ResultRow, ResultsSchema, ResultsTable};

    fn source_table() -> ResultsTable {
        let schema = ResultsSchema::from_headers(&[
            "Category", "Team name", "Time", "Start", "Leg 1", "Lap 1", "Leg 2", "Lap 2",
            "Leg 3", "Lap 3", "Leg 4", "Lap 4",
        ])
        .unwrap();
        let values = [
            "Solo Duo", "Spoke Folk", "46:00.0", "10:00:00", "Ann Lee", "10:00.0", "Bob Ray",
            "12:00.0", "Ann Lee", "11:00.0", "Bob Ray", "13:00.0",
        ];
        ResultsTable::with_rows(schema, vec![ResultRow::new(
            values.iter().map(|v| Cell::parse(v)).collect(),
        )])
    }

    fn roster() -> RosterIndex {
        RosterIndex::from_records(
            [RosterRecord {
                first_name: "Ann".into(),
                last_name: "Lee".into(),
                bib: "101".into(),
                category: "Women Open".into(),
            }],
            &NormalizeConfig::default(),
        )
    }

    #[test]
    fn rider_rows_carry_identity_and_renumbered_laps() {
        let table = source_table();
        let row = table.view(0).unwrap();
        let timeline = Timeline::build(0, &extract_leg_assignments(&row)).unwrap();
        let groups = timeline.rider_groups();
        let roster = roster();
        let synthesizer = RowSynthesizer::new(&roster);

        let ann = synthesizer.synthesize(&row, &groups[0]);
        assert_eq!(ann.bib, "101");
        assert_eq!(ann.category, "Women Open");
        assert_eq!(ann.team_name, "Ann Lee (Spoke Folk)");
        assert_eq!(ann.start.as_str(), Some("10:00:00"));
        assert_eq!(ann.time.as_str(), Some("00:33:00.0"));
        assert!(ann.in_roster);
        assert_eq!(ann.legs, vec![
            RiderLeg { rider: "Ann Lee".into(), split: "00:10:00.0".into(), lap: "00:10:00.0".into() },
            RiderLeg { rider: "Ann Lee".into(), split: "00:33:00.0".into(), lap: "00:23:00.0".into() },
        ]);

        let bob = synthesizer.synthesize(&row, &groups[1]);
        assert_eq!(bob.team_name, "Bob Ray (Spoke Folk)");
        assert_eq!(bob.bib, "");
        assert_eq!(bob.category, "I DUNNO");
        assert!(!bob.in_roster);
        assert_eq!(bob.legs[1].lap, "00:24:00.0");
    }
}
