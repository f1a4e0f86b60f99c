//! Test utilities for building tables in memory and locating fixtures
//!
//! This module provides helpers shared by unit tests and benchmarks: tables
//! and rosters parsed from inline tab-delimited text, fixture resolution under
//! `test-data/`, and a synthetic race generator.

#![cfg(any(test, feature = "benchmark"))]

use std::path::{Path, PathBuf};

use crate::config::NormalizeConfig;
use crate::roster::RosterIndex;
use crate::tsv::{read_results_from, read_roster_from};
use crate::types::ResultsTable;

/// Error returned when a required fixture cannot be located.
#[derive(Debug, Clone)]
pub struct FixtureError {
    message: String,
}

impl FixtureError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FixtureError {}

/// Directory holding the checked-in results and roster fixtures.
pub fn test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

/// Require that a fixture exists inside `test-data/`.
pub fn require_fixture(file_name: &str) -> Result<PathBuf, FixtureError> {
    let path = test_data_dir().join(file_name);
    if path.exists() {
        Ok(path)
    } else {
        Err(FixtureError::new(format!("Missing fixture: {}", path.display())))
    }
}

/// Parse an inline tab-delimited results table.
///
/// # Panics
///
/// Panics if the text is not a valid results table.
pub fn table_from_tsv(text: &str) -> ResultsTable {
    read_results_from(text.as_bytes(), &NormalizeConfig::default())
        .expect("inline results table should parse")
}

/// Parse an inline tab-delimited roster.
///
/// # Panics
///
/// Panics if the text is not a valid roster.
pub fn roster_from_tsv(text: &str) -> RosterIndex {
    read_roster_from(text.as_bytes(), &NormalizeConfig::default())
        .expect("inline roster should parse")
}

/// Results for `entries` relay rows of `laps` laps each, alternating between
/// two riders, plus the matching roster. Every fourth entry is a plain team row.
pub fn synthetic_race(entries: usize, laps: usize) -> (ResultsTable, RosterIndex) {
    let mut results = String::from("Bib\tCategory\tTeam name\tTime\tStart");
    for lap in 1..=laps {
        results.push_str(&format!("\tLeg {lap}\tSplit {lap}\tLap {lap}"));
    }
    results.push('\n');

    let mut roster = String::from("First Name\tLast Name\tBib\tCategory\n");
    for entry in 0..entries {
        let category = if entry % 4 == 3 { "Team of 2" } else { "Solo Duo" };
        results.push_str(&format!("{entry}\t{category}\tTeam {entry}\t-\t10:00:00"));
        for lap in 0..laps {
            let rider = lap % 2;
            let seconds = 600 + (entry + lap) % 120;
            results.push_str(&format!(
                "\tRider{rider} Entry{entry}\t-\t{:02}:{:02}.{}",
                seconds / 60,
                seconds % 60,
                lap % 10
            ));
        }
        results.push('\n');

        for rider in 0..2 {
            roster.push_str(&format!("Rider{rider}\tEntry{entry}\t{}\tDuo\n", entry * 2 + rider));
        }
    }

    (table_from_tsv(&results), roster_from_tsv(&roster))
}
