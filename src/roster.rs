//! Rider roster lookup
//!
//! The signup roster maps a rider's full name ("First Last") to their bib and
//! category. Timing exports only carry names in the `Leg i` cells, so every
//! reconstructed rider row resolves its identity here. A miss is not an error:
//! it is logged and answered with the configured fallback values.

use serde::Deserialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, warn};

use crate::config::NormalizeConfig;

pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const ROSTER_BIB: &str = "Bib";
pub const ROSTER_CATEGORY: &str = "Category";

/// Columns every roster table must carry.
pub const ROSTER_REQUIRED: [&str; 4] = [FIRST_NAME, LAST_NAME, ROSTER_BIB, ROSTER_CATEGORY];

/// One roster line as it is stored in the signup file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterRecord {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Bib", default)]
    pub bib: String,
    #[serde(rename = "Category", default)]
    pub category: String,
}

impl RosterRecord {
    /// Join key: given and family name separated by one space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Identity of a rider resolved from the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub full_name: String,
    pub bib: String,
    pub category: String,
}

impl From<RosterRecord> for RosterEntry {
    fn from(record: RosterRecord) -> Self {
        Self { full_name: record.full_name(), bib: record.bib, category: record.category }
    }
}

/// Outcome of a roster lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterMatch<'a> {
    Found(&'a RosterEntry),
    /// Sentinel identity built from the fallback values
    Unknown(RosterEntry),
}

impl RosterMatch<'_> {
    pub fn entry(&self) -> &RosterEntry {
        match self {
            RosterMatch::Found(entry) => entry,
            RosterMatch::Unknown(entry) => entry,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RosterMatch::Found(_))
    }
}

/// Read-only full-name index over the roster.
#[derive(Debug, Clone)]
pub struct RosterIndex {
    entries: HashMap<String, RosterEntry>,
    unknown_bib: String,
    unknown_category: String,
}

impl Default for RosterIndex {
    fn default() -> Self {
        Self::with_fallback(&NormalizeConfig::default())
    }
}

impl RosterIndex {
    /// Empty index answering misses with the fallback values from `config`.
    pub fn with_fallback(config: &NormalizeConfig) -> Self {
        Self {
            entries: HashMap::new(),
            unknown_bib: config.unknown_bib.clone(),
            unknown_category: config.unknown_category.clone(),
        }
    }

    /// Build the index from roster records. The first record for a full name wins.
    pub fn from_records<I>(records: I, config: &NormalizeConfig) -> Self
    where
        I: IntoIterator<Item = RosterRecord>,
    {
        let mut index = Self::with_fallback(config);
        for record in records {
            index.insert(record.into());
        }
        debug!(riders = index.len(), "Roster index built");
        index
    }

    /// Add an entry unless its full name is already indexed.
    pub fn insert(&mut self, entry: RosterEntry) {
        match self.entries.entry(entry.full_name.clone()) {
            Entry::Occupied(_) => {
                debug!(rider = %entry.full_name, "Duplicate roster name, keeping first entry");
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }

    pub fn get(&self, full_name: &str) -> Option<&RosterEntry> {
        self.entries.get(full_name)
    }

    /// Resolve a rider, logging a warning and returning the sentinel on a miss.
    pub fn lookup(&self, full_name: &str) -> RosterMatch<'_> {
        match self.entries.get(full_name) {
            Some(entry) => RosterMatch::Found(entry),
            None => {
                warn!(
                    rider = full_name,
                    category = %self.unknown_category,
                    "Rider not found in roster, using fallback bib and category"
                );
                RosterMatch::Unknown(RosterEntry {
                    full_name: full_name.to_string(),
                    bib: self.unknown_bib.clone(),
                    category: self.unknown_category.clone(),
                })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
