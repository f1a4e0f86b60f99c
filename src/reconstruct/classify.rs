//! Row classification
//!
//! A row goes through per-rider reconstruction only when its Category carries
//! the eligibility token and its Time is not the non-starter marker. The token
//! is matched literally as configured, whatever it suggests about solo or team
//! entries. Eligible rows whose legs all name one rider pass through unchanged.

use super::extract::{LegAssignment, extract_leg_assignments, is_single_rider};
use crate::config::NormalizeConfig;
use crate::types::{CATEGORY, RowView, TIME};

/// Why a row is copied to the output unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassthroughReason {
    NonStarter,
    CategoryNotEligible,
    /// Eligible row whose legs all name the same rider (or no rider)
    SingleRider,
}

/// Routing decision for one input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Passthrough(PassthroughReason),
    /// Row to split per rider, with its extracted legs
    Team(Vec<LegAssignment>),
}

/// Decides, row by row, between passthrough and reconstruction.
#[derive(Debug, Clone, Copy)]
pub struct EntryClassifier<'a> {
    config: &'a NormalizeConfig,
}

impl<'a> EntryClassifier<'a> {
    pub fn new(config: &'a NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, row: &RowView<'_>) -> EntryKind {
        let time = row.field(TIME).as_str();
        if time.is_some_and(|time| self.config.is_non_starter(time)) {
            return EntryKind::Passthrough(PassthroughReason::NonStarter);
        }

        let eligible =
            row.field(CATEGORY).as_str().is_some_and(|c| self.config.is_eligible_category(c));
        if !eligible {
            return EntryKind::Passthrough(PassthroughReason::CategoryNotEligible);
        }

        let legs = extract_leg_assignments(row);
        if is_single_rider(&legs) {
            return EntryKind::Passthrough(PassthroughReason::SingleRider);
        }

        EntryKind::Team(legs)
    }
}
