//! Per-rider normalization of relay race results.
//!
//! Timing systems export a relay entry as a single row: one team name, one
//! total time, and `Leg i` / `Split i` / `Lap i` columns recording who rode
//! each lap. Solo-category relays (a "solo" category ridden by more than one
//! person) need to be scored per rider instead, so this crate splits those rows
//! into one row per rider, recomputes each rider's own cumulative splits and
//! lap durations, attaches roster identity, and settles every row's Time.
//!
//! # Features
//!
//! - **Tab-delimited IO**: results and roster tables in, `<stem>-fixed.<ext>` out
//! - **Unified missing values**: blanks, dashes and NaN tokens are one [`Cell`] state
//! - **Deterministic**: rider order, column order and row order are stable
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use relay_splits::ResultsFixer;
//!
//! fn main() -> relay_splits::Result<()> {
//!     let outcome = ResultsFixer::default().fix_file("results.txt", "roster.txt")?;
//!     println!("wrote {}", outcome.output.display());
//!     Ok(())
//! }
//! ```

// Core types and error handling
pub mod config;
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod time_codec;
pub mod types;

// Transform pipeline
pub mod normalize;
pub mod postprocess;
pub mod reconstruct;
pub mod roster;

// Table IO
pub mod tsv;

// Core exports
pub use config::NormalizeConfig;
pub use error::*;
pub use types::*;

// Main API exports
pub use normalize::{NormalizeReport, Normalized, Normalizer};
pub use roster::{RosterEntry, RosterIndex};
pub use time_codec::{format_elapsed, parse_elapsed};

use std::path::{Path, PathBuf};
use tracing::info;

/// Result of fixing one results file.
#[derive(Debug, Clone)]
pub struct FixOutcome {
    /// Where the normalized table was written
    pub output: PathBuf,
    pub report: NormalizeReport,
}

/// Unified entry point: load, normalize and write a results file.
///
/// # Examples
///
/// ```rust,no_run
/// use relay_splits::{NormalizeConfig, ResultsFixer};
///
/// # fn main() -> relay_splits::Result<()> {
/// let fixer = ResultsFixer::new(NormalizeConfig::default());
/// let outcome = fixer.fix_file("race/results.txt", "race/signup.txt")?;
/// assert!(outcome.output.ends_with("results-fixed.txt"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResultsFixer {
    config: NormalizeConfig,
}

impl ResultsFixer {
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Normalize the results at `results` against the roster at `roster`,
    /// writing the output next to the input.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either input cannot be read or lacks a required column
    /// - A relay lap time is missing or unparseable
    /// - The output file cannot be written
    ///
    /// Nothing is written when normalization fails.
    pub fn fix_file<P, Q>(&self, results: P, roster: Q) -> Result<FixOutcome>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let results = results.as_ref();
        let roster = tsv::read_roster(roster.as_ref(), &self.config)?;
        let table = tsv::read_results(results, &self.config)?;

        let Normalized { table, report } = self.normalize(&table, &roster)?;

        let output = self.config.output_path(results);
        tsv::write_results(&output, &table, &self.config)?;
        info!(output = %output.display(), rows = report.output_rows, "Fixed results written");

        Ok(FixOutcome { output, report })
    }

    /// Normalize an already loaded table.
    pub fn normalize(&self, table: &ResultsTable, roster: &RosterIndex) -> Result<Normalized> {
        Normalizer::new(roster, &self.config).normalize(table)
    }
}

/// Fix one results file with the given conventions.
///
/// Shorthand for [`ResultsFixer::fix_file`].
pub fn fix_results_file(
    results: impl AsRef<Path>,
    roster: impl AsRef<Path>,
    config: &NormalizeConfig,
) -> Result<FixOutcome> {
    ResultsFixer::new(config.clone()).fix_file(results, roster)
}
