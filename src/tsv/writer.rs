//! Tab-delimited output
//!
//! Missing cells are written back in the timing export's own convention:
//! an empty rider name, and a dash for split and lap times.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::config::NormalizeConfig;
use crate::types::{Cell, ColumnId, ColumnRole, ResultsTable};
use crate::{Result, ResultsError};

/// Text written for `cell` in column `id`.
pub fn render_cell<'a>(id: &ColumnId, cell: &'a Cell) -> &'a str {
    match cell {
        Cell::Value(value) => value,
        Cell::Missing => match id.role() {
            Some(ColumnRole::Split | ColumnRole::Lap) => "-",
            Some(ColumnRole::Leg) | None => "",
        },
    }
}

/// Write `table` to `path`, replacing any existing file.
pub fn write_results(path: &Path, table: &ResultsTable, config: &NormalizeConfig) -> Result<()> {
    let file = File::create(path).map_err(|e| ResultsError::file_error(path.to_path_buf(), e))?;
    write_results_to(file, table, config)?;
    debug!(path = %path.display(), rows = table.len(), "Wrote results");
    Ok(())
}

/// Write `table` to any writer: header row first, then one line per row.
pub fn write_results_to<W: Write>(
    writer: W,
    table: &ResultsTable,
    config: &NormalizeConfig,
) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    let columns = table.schema().columns();
    csv_writer
        .write_record(columns.iter().map(|column| column.header.as_str()))
        .map_err(|e| ResultsError::table_error("output header", e))?;

    for (number, row) in table.rows().iter().enumerate() {
        let record = columns
            .iter()
            .enumerate()
            .map(|(position, column)| render_cell(&column.id, row.get(position)));
        csv_writer
            .write_record(record)
            .map_err(|e| ResultsError::table_error(format!("output row {}", number + 1), e))?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::table_from_tsv;

    fn render(table: &ResultsTable) -> String {
        let mut buffer = Vec::new();
        write_results_to(&mut buffer, table, &NormalizeConfig::default()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn missing_cells_follow_column_family() {
        let table = table_from_tsv(
            "Category\tTeam name\tTime\tStart\tLeg 1\tSplit 1\tLap 1\n\
             Solo\t\tDNS\tnan\t\t\t\n",
        );
        assert_eq!(
            render(&table),
            "Category\tTeam name\tTime\tStart\tLeg 1\tSplit 1\tLap 1\nSolo\t\tDNS\t\t\t-\t-\n"
        );
    }

    #[test]
    fn values_are_written_verbatim() {
        let table = table_from_tsv(
            "Category\tTeam name\tTime\tStart\tLeg 1\tSplit 1\tLap 1\n\
             Solo Men\tAnn Lee (Spokes)\t-1 laps\t09:00:00\tAnn Lee\t00:10:00.0\t00:10:00.0\n",
        );
        let text = render(&table);
        assert!(text.ends_with(
            "Solo Men\tAnn Lee (Spokes)\t-1 laps\t09:00:00\tAnn Lee\t00:10:00.0\t00:10:00.0\n"
        ));
    }

    #[test]
    fn render_cell_for_named_fields() {
        assert_eq!(render_cell(&ColumnId::field("Bib"), &Cell::Missing), "");
        assert_eq!(render_cell(&ColumnId::leg(3), &Cell::Missing), "");
        assert_eq!(render_cell(&ColumnId::split(3), &Cell::Missing), "-");
        assert_eq!(render_cell(&ColumnId::lap(3), &Cell::from("12:00.0")), "12:00.0");
    }
}
