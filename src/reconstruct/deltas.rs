//! Rider-relative lap durations
//!
//! On a relay row a lap time belongs to the team clock. Once a rider's laps
//! are pulled into their own row, each lap is re-measured as the gap between
//! that rider's consecutive cumulative splits. The first lap has no earlier
//! split to measure from, so it equals its own cumulative elapsed time.

use std::time::Duration;

use super::timeline::RiderGroup;
use crate::time_codec::format_elapsed;

/// One lap of a rider's reconstructed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderLap<'a> {
    pub leg_index: usize,
    /// Cumulative split taken from the row timeline
    pub split: &'a str,
    /// Time since the rider's previous split
    pub lap_time: Duration,
    /// `lap_time` formatted for display
    pub lap: String,
}

/// Recompute lap durations relative to the rider's own previous split.
pub fn rider_relative_laps<'a>(group: &RiderGroup<'a>) -> Vec<RiderLap<'a>> {
    let mut previous: Option<Duration> = None;
    group
        .members()
        .iter()
        .map(|&entry| {
            let lap_time = match previous {
                Some(earlier) => entry.elapsed.saturating_sub(earlier),
                None => entry.elapsed,
            };
            previous = Some(entry.elapsed);
            RiderLap {
                leg_index: entry.leg_index,
                split: entry.split.as_str(),
                lap_time,
                lap: format_elapsed(lap_time),
            }
        })
        .collect()
}
