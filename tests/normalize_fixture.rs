//! End-to-end normalization of the checked-in race fixture

use std::fs;
use std::path::{Path, PathBuf};

use relay_splits::tsv::{read_results, read_roster};
use relay_splits::{NormalizeConfig, ResultsError, ResultsFixer, fix_results_file};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data").join(name)
}

/// Copy both fixtures into a scratch directory so the output lands there.
fn staged_race() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let results = dir.path().join("results.txt");
    let roster = dir.path().join("roster.txt");
    fs::copy(fixture("results.txt"), &results).expect("copy results");
    fs::copy(fixture("roster.txt"), &roster).expect("copy roster");
    (dir, results, roster)
}

fn output_rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

const EXPECTED: &[&[&str]] = &[
    &[
        "Place", "Bib", "Category", "Team name", "Time", "Start", "Leg 1", "Split 1", "Lap 1",
        "Leg 2", "Split 2", "Lap 2", "Leg 3", "Split 3", "Lap 3", "Leg 4", "Split 4", "Lap 4",
    ],
    &[
        "", "101", "Women Duo", "Ann Lee (Spoke Folk)", "-2 laps", "10:00:00", "Ann Lee",
        "00:10:00.0", "00:10:00.0", "Ann Lee", "00:33:00.0", "00:23:00.0", "", "-", "-", "", "-",
        "-",
    ],
    &[
        "", "102", "Men Duo", "Bob Ray (Spoke Folk)", "-2 laps", "10:00:00", "Bob Ray",
        "00:22:00.0", "00:22:00.0", "Bob Ray", "00:46:00.0", "00:24:00.0", "", "-", "-", "", "-",
        "-",
    ],
    &[
        "2", "12", "Team of 4", "Quad Squad", "01:20:00.0", "10:00:00", "Wes Ash", "00:20:00.0",
        "20:00.0", "Xia Bo", "00:40:00.0", "20:00.0", "Yul Cy", "01:00:00.0", "20:00.0", "Zed Du",
        "01:20:00.0", "20:00.0",
    ],
    &[
        "3", "21", "Solo Women", "Cara Moss", "-1 laps", "10:00:00", "Cara Moss", "00:20:00.0",
        "20:00.0", "Cara Moss", "00:42:00.0", "22:00.0", "Cara Moss", "01:05:00.0", "23:00.0", "",
        "-", "-",
    ],
    &[
        "", "30", "Solo Men", "Dan Fox", "-4 laps", "10:00:00", "", "-", "-", "", "-", "-", "", "-",
        "-", "", "-", "-",
    ],
    &[
        "", "", "I DUNNO", "Eve Nox (Mystery)", "-3 laps", "10:00:00", "Eve Nox", "00:20:00.0",
        "00:20:00.0", "", "-", "-", "", "-", "-", "", "-", "-",
    ],
    &[
        "", "140", "Men Relay", "Gus Hill (Mystery)", "-3 laps", "10:00:00", "Gus Hill",
        "01:25:30.5", "01:25:30.5", "", "-", "-", "", "-", "-", "", "-", "-",
    ],
];

#[test]
fn fixture_normalizes_to_expected_table() {
    let (_dir, results, roster) = staged_race();
    let outcome = ResultsFixer::default().fix_file(&results, &roster).unwrap();

    assert_eq!(outcome.output, results.with_file_name("results-fixed.txt"));
    let rows = output_rows(&outcome.output);
    assert_eq!(rows.len(), EXPECTED.len());
    for (actual, expected) in rows.iter().zip(EXPECTED) {
        assert_eq!(actual, expected);
    }
}

#[test]
fn report_counts_every_decision() {
    let (_dir, results, roster) = staged_race();
    let report = ResultsFixer::default().fix_file(&results, &roster).unwrap().report;

    assert_eq!(report.input_rows, 5);
    assert_eq!(report.output_rows, 7);
    assert_eq!(report.non_starters, 1);
    assert_eq!(report.ineligible, 1);
    assert_eq!(report.single_rider, 1);
    assert_eq!(report.relays_split, 2);
    assert_eq!(report.rider_rows, 4);
    assert_eq!(report.roster_misses, 1);
    assert_eq!(report.pruned_columns, ["Leg 5", "Split 5", "Lap 5"]);
    assert_eq!(report.short_of_laps, 6);
}

#[test]
fn output_is_deterministic() {
    let (_dir, results, roster) = staged_race();
    let config = NormalizeConfig::default();
    let first = fs::read(fix_results_file(&results, &roster, &config).unwrap().output).unwrap();
    let second = fs::read(fix_results_file(&results, &roster, &config).unwrap().output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn loaded_tables_normalize_in_memory() {
    let config = NormalizeConfig::default();
    let table = read_results(&fixture("results.txt"), &config).unwrap();
    let roster = read_roster(&fixture("roster.txt"), &config).unwrap();

    assert_eq!(roster.get("Ann Lee").map(|entry| entry.bib.as_str()), Some("101"));

    let normalized = ResultsFixer::new(config).normalize(&table, &roster).unwrap();
    assert_eq!(normalized.table.len(), 7);
    assert_eq!(normalized.table.schema().max_legs(), 4);
}

#[test]
fn bad_lap_time_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results.txt");
    let roster = dir.path().join("roster.txt");
    fs::write(
        &results,
        "Category\tTeam name\tTime\tStart\tLeg 1\tLap 1\tLeg 2\tLap 2\n\
         Solo Duo\tPair\t30:00.0\t10:00:00\tAnn Lee\t10 min\tBob Ray\t20:00.0\n",
    )
    .unwrap();
    fs::copy(fixture("roster.txt"), &roster).unwrap();

    let err = ResultsFixer::default().fix_file(&results, &roster).unwrap_err();
    assert!(matches!(err, ResultsError::TimeFormat { ref value } if value == "10 min"));
    assert!(!results.with_file_name("results-fixed.txt").exists());
}

#[test]
fn assigned_leg_without_lap_aborts() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results.txt");
    let roster = dir.path().join("roster.txt");
    fs::write(
        &results,
        "Category\tTeam name\tTime\tStart\tLeg 1\tLap 1\tLeg 2\tLap 2\n\
         Solo Duo\tPair\t30:00.0\t10:00:00\tAnn Lee\t10:00.0\tBob Ray\t-\n",
    )
    .unwrap();
    fs::copy(fixture("roster.txt"), &roster).unwrap();

    let err = ResultsFixer::default().fix_file(&results, &roster).unwrap_err();
    assert!(matches!(err, ResultsError::MissingLapTime { row: 0, leg: 2 }));
}
