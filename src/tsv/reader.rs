//! Tab-delimited table loading
//!
//! Both inputs are header-first tab-delimited text. Results rows may be ragged:
//! short rows are padded with missing cells and cells beyond the header are
//! dropped. Every cell is classified into [`Cell`] as it is read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::config::NormalizeConfig;
use crate::roster::{ROSTER_REQUIRED, RosterIndex, RosterRecord};
use crate::types::{Cell, ResultRow, ResultsSchema, ResultsTable};
use crate::{Result, ResultsError};

fn reader_builder(config: &NormalizeConfig) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.delimiter(config.delimiter).has_headers(true).flexible(true);
    builder
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| ResultsError::file_error(path.to_path_buf(), e))
}

/// Load a results table from disk.
pub fn read_results(path: &Path, config: &NormalizeConfig) -> Result<ResultsTable> {
    let table = read_results_from(open(path)?, config)?;
    debug!(
        path = %path.display(),
        rows = table.len(),
        max_legs = table.schema().max_legs(),
        "Loaded results"
    );
    Ok(table)
}

/// Load a results table from any reader.
pub fn read_results_from<R: Read>(reader: R, config: &NormalizeConfig) -> Result<ResultsTable> {
    let mut csv_reader = reader_builder(config).from_reader(reader);

    let headers =
        csv_reader.headers().map_err(|e| ResultsError::table_error("results header", e))?.clone();
    let schema = ResultsSchema::from_headers(&headers.iter().collect::<Vec<_>>())?;
    let width = schema.len();

    let mut table = ResultsTable::new(schema);
    for (number, record) in csv_reader.records().enumerate() {
        let record = record
            .map_err(|e| ResultsError::table_error(format!("results row {}", number + 1), e))?;
        table.push_row(ResultRow::new(record.iter().take(width).map(Cell::parse).collect()));
    }
    Ok(table)
}

/// Load the roster from disk and index it by full name.
pub fn read_roster(path: &Path, config: &NormalizeConfig) -> Result<RosterIndex> {
    let roster = read_roster_from(open(path)?, config)?;
    debug!(path = %path.display(), riders = roster.len(), "Loaded roster");
    Ok(roster)
}

/// Load the roster from any reader and index it by full name.
pub fn read_roster_from<R: Read>(reader: R, config: &NormalizeConfig) -> Result<RosterIndex> {
    let mut csv_reader = reader_builder(config).from_reader(reader);

    let headers =
        csv_reader.headers().map_err(|e| ResultsError::table_error("roster header", e))?.clone();
    for column in ROSTER_REQUIRED {
        if !headers.iter().any(|header| header == column) {
            return Err(ResultsError::missing_column("roster", column));
        }
    }

    let records = csv_reader
        .deserialize::<RosterRecord>()
        .enumerate()
        .map(|(number, record)| {
            record.map_err(|e| ResultsError::table_error(format!("roster row {}", number + 1), e))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RosterIndex::from_records(records, config))
}
