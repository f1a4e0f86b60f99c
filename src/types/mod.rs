//! Core types for results tables.
//!
//! ## Architecture
//!
//! - [`Cell`] is a single cell, with every "no value" convention folded into
//!   [`Cell::Missing`] at load time
//! - [`ResultsSchema`] is the ordered column layout; headers are resolved into
//!   [`ColumnId`] values once, with the `Leg i` / `Split i` / `Lap i` families
//!   tagged by [`ColumnRole`]
//! - [`ResultsTable`] owns the schema plus its [`ResultRow`]s, and hands out
//!   [`RowView`]s for by-name access
//!
//! ## Usage Example
//!
//! ```rust
//! use relay_splits::types::{Cell, ColumnId, ResultRow, ResultsSchema, ResultsTable};
//!
//! let schema = ResultsSchema::from_headers(&[
//!     "Category", "Team name", "Time", "Start", "Leg 1", "Split 1", "Lap 1",
//! ])?;
//! let mut table = ResultsTable::new(schema);
//! table.push_row(ResultRow::new(
//!     ["Solo Men", "Spokes", "00:58:12.0", "10:00:00", "Ann Lee", "-", "58:12.0"]
//!         .iter()
//!         .map(|raw| Cell::parse(raw))
//!         .collect(),
//! ));
//!
//! let row = table.view(0).unwrap();
//! assert_eq!(row.cell(&ColumnId::leg(1)).as_str(), Some("Ann Lee"));
//! assert!(row.cell(&ColumnId::split(1)).is_missing());
//! # Ok::<(), relay_splits::ResultsError>(())
//! ```

mod cell;
mod row;
mod schema;

pub use cell::{Cell, MISSING_TOKENS};
pub use row::{ResultRow, ResultsTable, RowView};
pub use schema::{
    BIB, CATEGORY, Column, ColumnId, ColumnRole, REQUIRED_FIELDS, ResultsSchema, START, TEAM_NAME,
    TIME,
};
