//! Rows and the in-memory results table

use super::{Cell, ColumnId, ColumnRole, ResultsSchema};

static MISSING: Cell = Cell::Missing;

/// One row of a results table, cells aligned with the schema's columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    cells: Vec<Cell>,
}

impl ResultRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// A row of `width` missing cells.
    pub fn missing(width: usize) -> Self {
        Self { cells: vec![Cell::Missing; width] }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `position`; positions past the end read as missing.
    pub fn get(&self, position: usize) -> &Cell {
        self.cells.get(position).unwrap_or(&MISSING)
    }

    pub fn set(&mut self, position: usize, cell: Cell) {
        if position >= self.cells.len() {
            self.cells.resize(position + 1, Cell::Missing);
        }
        self.cells[position] = cell;
    }

    pub(crate) fn pad_to(&mut self, width: usize) {
        if self.cells.len() < width {
            self.cells.resize(width, Cell::Missing);
        }
    }

    pub(crate) fn retain_positions(&mut self, keep: &[bool]) {
        let mut flags = keep.iter();
        self.cells.retain(|_| flags.next().copied().unwrap_or(true));
    }
}

/// Borrowed view of a row together with the schema that names its cells.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    schema: &'a ResultsSchema,
    row: &'a ResultRow,
    number: usize,
}

impl<'a> RowView<'a> {
    pub fn new(schema: &'a ResultsSchema, row: &'a ResultRow, number: usize) -> Self {
        Self { schema, row, number }
    }

    /// Zero-based row number within the source table.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn row(&self) -> &'a ResultRow {
        self.row
    }

    pub fn cell(&self, id: &ColumnId) -> &'a Cell {
        match self.schema.position(id) {
            Some(position) => self.row.get(position),
            None => &MISSING,
        }
    }

    pub fn field(&self, name: &str) -> &'a Cell {
        self.cell(&ColumnId::field(name))
    }

    /// `(index, cell)` for every column of `role`, in header order.
    pub fn numbered(&self, role: ColumnRole) -> Vec<(usize, &'a Cell)> {
        self.schema
            .numbered_positions(role)
            .into_iter()
            .map(|(index, position)| (index, self.row.get(position)))
            .collect()
    }
}

/// A results table: a schema plus rows that all share it.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    schema: ResultsSchema,
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    pub fn new(schema: ResultsSchema) -> Self {
        Self { schema, rows: Vec::new() }
    }

    pub fn with_rows(schema: ResultsSchema, rows: Vec<ResultRow>) -> Self {
        let mut table = Self::new(schema);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn schema(&self) -> &ResultsSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn view(&self, number: usize) -> Option<RowView<'_>> {
        self.rows.get(number).map(|row| RowView::new(&self.schema, row, number))
    }

    pub fn views(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().enumerate().map(|(number, row)| RowView::new(&self.schema, row, number))
    }

    /// Append a row, padding it to the schema width.
    pub fn push_row(&mut self, mut row: ResultRow) {
        row.pad_to(self.schema.len());
        self.rows.push(row);
    }

    /// Position of `id`, appending the column (missing in every existing
    /// row) when the schema does not have it yet.
    pub fn ensure_column(&mut self, id: &ColumnId) -> usize {
        if let Some(position) = self.schema.position(id) {
            return position;
        }
        let position = self.schema.push(id.clone());
        for row in &mut self.rows {
            row.pad_to(position + 1);
        }
        position
    }

    /// Column ids of `role` in which every row is missing.
    pub fn empty_columns(&self, role: ColumnRole) -> Vec<ColumnId> {
        self.schema
            .numbered_positions(role)
            .into_iter()
            .filter(|&(_, position)| self.rows.iter().all(|row| row.get(position).is_missing()))
            .map(|(index, _)| ColumnId::Numbered(role, index))
            .collect()
    }

    /// Drop every column whose id is listed.
    pub fn remove_columns(&mut self, ids: &[ColumnId]) {
        if ids.is_empty() {
            return;
        }
        let keep: Vec<bool> =
            self.schema.columns().iter().map(|column| !ids.contains(&column.id)).collect();
        for row in &mut self.rows {
            row.retain_positions(&keep);
        }
        self.schema.retain_positions(&keep);
    }

    /// Mutable access to one cell by row number and column position.
    pub(crate) fn set_cell(&mut self, number: usize, position: usize, cell: Cell) {
        if let Some(row) = self.rows.get_mut(number) {
            row.set(position, cell);
        }
    }
}
