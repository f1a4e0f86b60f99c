//! Fixed conventions of the timing exports this tool reads.
//!
//! None of these are exposed on the command line; they are gathered here so the
//! normalizer receives them explicitly instead of reaching for literals.

use std::path::{Path, PathBuf};

/// Conventions used while normalizing a results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Substring (case-insensitive) of the Category that selects a row for
    /// per-rider reconstruction.
    pub eligible_category_token: String,
    /// Time value marking an entry that did not start.
    pub non_starter_marker: String,
    /// Category written for riders missing from the roster.
    pub unknown_category: String,
    /// Bib written for riders missing from the roster.
    pub unknown_bib: String,
    /// Field delimiter of both input tables and the output.
    pub delimiter: u8,
    /// Inserted between the input file stem and its extension.
    pub output_suffix: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            eligible_category_token: "solo".to_string(),
            non_starter_marker: "DNS".to_string(),
            unknown_category: "I DUNNO".to_string(),
            unknown_bib: String::new(),
            delimiter: b'\t',
            output_suffix: "-fixed".to_string(),
        }
    }
}

impl NormalizeConfig {
    /// Whether `category` carries the eligibility token.
    pub fn is_eligible_category(&self, category: &str) -> bool {
        category.to_lowercase().contains(&self.eligible_category_token.to_lowercase())
    }

    pub fn is_non_starter(&self, time: &str) -> bool {
        time == self.non_starter_marker
    }

    /// `results.txt` becomes `results-fixed.txt` in the same directory.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        let name = match input.extension() {
            Some(ext) => format!("{}{}.{}", stem, self.output_suffix, ext.to_string_lossy()),
            None => format!("{}{}", stem, self.output_suffix),
        };
        input.with_file_name(name)
    }
}
