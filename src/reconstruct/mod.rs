//! Relay entry reconstruction.
//!
//! A relay row records, per lap, which rider rode it and how long it took on
//! the team clock. Reconstruction turns such a row into one row per rider:
//!
//! ```text
//!   RowView ──► classify ──► extract legs ──► Timeline ──► RiderGroups
//!                  │                                           │
//!                  ▼                                           ▼
//!             passthrough                        relative laps ──► RiderRow
//! ```
//!
//! Each stage is a plain function or a small borrowed helper; the driver that
//! strings them together and owns the output lives in [`crate::normalize`].

pub mod classify;
pub mod deltas;
pub mod extract;
pub mod synthesize;
pub mod timeline;

pub use classify::{EntryClassifier, EntryKind, PassthroughReason};
pub use deltas::{RiderLap, rider_relative_laps};
pub use extract::{LegAssignment, extract_leg_assignments, is_single_rider};
pub use synthesize::{RiderLeg, RiderRow, RowSynthesizer};
pub use timeline::{RiderGroup, Timeline, TimelineEntry};
