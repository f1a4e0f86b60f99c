//! Row timeline and per-rider grouping
//!
//! Lap times of a relay row are summed in leg order into cumulative elapsed
//! times. The resulting timeline is then partitioned by rider: each group keeps
//! its members in lap order, and groups come out sorted by rider name so the
//! output is identical from run to run.

use std::collections::BTreeMap;
use std::time::Duration;

use super::extract::LegAssignment;
use crate::time_codec::{format_elapsed, parse_elapsed};
use crate::{Result, ResultsError};

/// One lap of a row's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub leg_index: usize,
    pub rider: String,
    /// Lap duration as recorded on the row
    pub lap_time: Duration,
    /// Running total of `lap_time` up to and including this lap
    pub elapsed: Duration,
    /// `elapsed` formatted for display
    pub split: String,
}

/// Cumulative timeline of one relay row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Build the timeline of source row `row` from its leg assignments.
    ///
    /// Fails if any assigned leg lacks a lap time or carries one that does not
    /// parse.
    pub fn build(row: usize, legs: &[LegAssignment]) -> Result<Self> {
        let mut elapsed = Duration::ZERO;
        let mut entries = Vec::with_capacity(legs.len());

        for leg in legs {
            let raw = leg
                .raw_lap_time
                .as_deref()
                .ok_or(ResultsError::MissingLapTime { row, leg: leg.leg_index })?;
            let lap_time = parse_elapsed(raw)?;
            elapsed += lap_time;
            entries.push(TimelineEntry {
                leg_index: leg.leg_index,
                rider: leg.rider.clone(),
                lap_time,
                elapsed,
                split: format_elapsed(elapsed),
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Partition the timeline by rider, sorted by rider name.
    pub fn rider_groups(&self) -> Vec<RiderGroup<'_>> {
        let mut groups: BTreeMap<&str, Vec<&TimelineEntry>> = BTreeMap::new();
        for entry in &self.entries {
            groups.entry(entry.rider.as_str()).or_default().push(entry);
        }
        groups.into_iter().map(|(rider, members)| RiderGroup { rider, members }).collect()
    }
}

/// Every lap one rider rode within a single relay row, in lap order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderGroup<'a> {
    rider: &'a str,
    members: Vec<&'a TimelineEntry>,
}

impl<'a> RiderGroup<'a> {
    pub fn rider(&self) -> &'a str {
        self.rider
    }

    pub fn members(&self) -> &[&'a TimelineEntry] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Cumulative split at the rider's last lap.
    pub fn final_split(&self) -> Option<&'a str> {
        self.members.last().map(|entry| entry.split.as_str())
    }
}
