//! Column schema for results tables
//!
//! Timing exports carry a handful of named columns plus three numbered
//! families, `Leg i`, `Split i` and `Lap i`. Headers are resolved into a
//! [`ColumnId`] once when the table is loaded; nothing downstream inspects
//! header text again.

use std::collections::HashMap;
use std::fmt;

use crate::{Result, ResultsError};

pub const CATEGORY: &str = "Category";
pub const TEAM_NAME: &str = "Team name";
pub const TIME: &str = "Time";
pub const START: &str = "Start";
pub const BIB: &str = "Bib";

/// Named columns every results table must carry.
pub const REQUIRED_FIELDS: [&str; 4] = [CATEGORY, TEAM_NAME, TIME, START];

/// Role of a numbered column family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnRole {
    /// Rider who rode lap `i`
    Leg,
    /// Cumulative elapsed time at the end of lap `i`
    Split,
    /// Duration of lap `i`
    Lap,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 3] = [ColumnRole::Leg, ColumnRole::Split, ColumnRole::Lap];

    pub fn label(self) -> &'static str {
        match self {
            ColumnRole::Leg => "Leg",
            ColumnRole::Split => "Split",
            ColumnRole::Lap => "Lap",
        }
    }

    /// Canonical header text for column `index` of this family.
    pub fn header(self, index: usize) -> String {
        format!("{} {}", self.label(), index)
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label().eq_ignore_ascii_case(label))
    }
}

/// Identity of a column, independent of its position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Field(String),
    Numbered(ColumnRole, usize),
}

impl ColumnId {
    pub fn field(name: impl Into<String>) -> Self {
        ColumnId::Field(name.into())
    }

    pub fn leg(index: usize) -> Self {
        ColumnId::Numbered(ColumnRole::Leg, index)
    }

    pub fn split(index: usize) -> Self {
        ColumnId::Numbered(ColumnRole::Split, index)
    }

    pub fn lap(index: usize) -> Self {
        ColumnId::Numbered(ColumnRole::Lap, index)
    }

    /// Resolve header text. `"<Role> <n>"` (role matched case-insensitively)
    /// becomes a numbered column; anything else is a named field.
    pub fn from_header(header: &str) -> Self {
        let trimmed = header.trim();
        if let Some((label, number)) = trimmed.split_once(' ') {
            if let Some(role) = ColumnRole::from_label(label) {
                if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) {
                    if let Ok(index) = number.parse() {
                        return ColumnId::Numbered(role, index);
                    }
                }
            }
        }
        ColumnId::Field(header.to_string())
    }

    pub fn role(&self) -> Option<ColumnRole> {
        match self {
            ColumnId::Field(_) => None,
            ColumnId::Numbered(role, _) => Some(*role),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnId::Field(name) => f.write_str(name),
            ColumnId::Numbered(role, index) => write!(f, "{} {}", role.label(), index),
        }
    }
}

/// A column as it appears in a table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text as written in the source file
    pub header: String,
    pub id: ColumnId,
}

impl Column {
    pub fn from_header(header: impl Into<String>) -> Self {
        let header = header.into();
        let id = ColumnId::from_header(&header);
        Self { header, id }
    }

    pub fn from_id(id: ColumnId) -> Self {
        Self { header: id.to_string(), id }
    }
}

/// Ordered column layout of a results table with O(1) lookup by [`ColumnId`].
#[derive(Debug, Clone, Default)]
pub struct ResultsSchema {
    columns: Vec<Column>,
    index: HashMap<ColumnId, usize>,
}

impl ResultsSchema {
    /// Build a schema from a header row and check the required fields exist.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let schema = Self::new(headers.iter().map(|h| Column::from_header(h.as_ref())).collect());
        schema.validate()?;
        Ok(schema)
    }

    /// Build a schema without validation.
    pub fn new(columns: Vec<Column>) -> Self {
        let mut schema = Self { columns, index: HashMap::new() };
        schema.reindex();
        schema
    }

    /// Validate that every required field is present.
    pub fn validate(&self) -> Result<()> {
        for field in REQUIRED_FIELDS {
            if self.field_position(field).is_none() {
                return Err(ResultsError::missing_column("results", field));
            }
        }
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, id: &ColumnId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn field_position(&self, name: &str) -> Option<usize> {
        self.position(&ColumnId::field(name))
    }

    /// `(index, position)` for every column of `role`, in header order.
    pub fn numbered_positions(&self, role: ColumnRole) -> Vec<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(position, column)| match column.id {
                ColumnId::Numbered(r, index) if r == role => Some((index, position)),
                _ => None,
            })
            .collect()
    }

    /// Number of `Leg i` columns, i.e. the most riders-laps a row can assign.
    pub fn max_legs(&self) -> usize {
        self.numbered_positions(ColumnRole::Leg).len()
    }

    /// Append a column and return its position.
    pub(crate) fn push(&mut self, id: ColumnId) -> usize {
        let position = self.columns.len();
        self.index.entry(id.clone()).or_insert(position);
        self.columns.push(Column::from_id(id));
        position
    }

    /// Keep only the columns whose `keep` flag is set.
    pub(crate) fn retain_positions(&mut self, keep: &[bool]) {
        let mut flags = keep.iter();
        self.columns.retain(|_| flags.next().copied().unwrap_or(true));
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (position, column) in self.columns.iter().enumerate() {
            // First occurrence wins when a header is repeated.
            self.index.entry(column.id.clone()).or_insert(position);
        }
    }
}
