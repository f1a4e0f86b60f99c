//! Whole-table passes run once after every row has been assembled.
//!
//! Pruning must run before the status rewrite: the lap count a row is measured
//! against is the number of `Lap` columns left after pruning.

use tracing::{debug, warn};

use crate::types::{Cell, ColumnId, ColumnRole, ResultsTable, TIME};

/// Drop every `Leg`, `Split` and `Lap` column that is missing in all rows.
///
/// Returns the headers of the dropped columns.
pub fn prune_empty_columns(table: &mut ResultsTable) -> Vec<String> {
    let empty: Vec<ColumnId> =
        ColumnRole::ALL.into_iter().flat_map(|role| table.empty_columns(role)).collect();

    let headers: Vec<String> = table
        .schema()
        .columns()
        .iter()
        .filter(|column| empty.contains(&column.id))
        .map(|column| column.header.clone())
        .collect();

    if !headers.is_empty() {
        debug!(columns = ?headers, "Pruning empty columns");
    }
    table.remove_columns(&empty);
    headers
}

/// Counts from a status rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    /// Rows whose Time became a `-N laps` marker
    pub short_of_laps: usize,
    /// Rows whose Time became their final split
    pub completed: usize,
}

/// Settle the Time cell of every row.
///
/// With `MaxLaps` the number of `Lap` columns, a row with fewer recorded laps
/// gets `-{MaxLaps - laps} laps`; a complete row gets its `Split {MaxLaps}`.
/// Every row is settled this way, non-starters included. Nothing changes when
/// the table has no `Lap` columns at all.
pub fn rewrite_status(table: &mut ResultsTable) -> StatusSummary {
    let mut summary = StatusSummary::default();

    let Some(time_position) = table.schema().field_position(TIME) else {
        return summary;
    };
    let lap_positions: Vec<usize> = table
        .schema()
        .numbered_positions(ColumnRole::Lap)
        .into_iter()
        .map(|(_, position)| position)
        .collect();
    let max_laps = lap_positions.len();
    if max_laps == 0 {
        return summary;
    }
    let final_split = table.schema().position(&ColumnId::split(max_laps));

    let mut updates = Vec::new();
    for (number, row) in table.rows().iter().enumerate() {
        let completed = lap_positions.iter().filter(|&&p| !row.get(p).is_missing()).count();
        if completed < max_laps {
            updates.push((number, Cell::from(format!("-{} laps", max_laps - completed))));
            summary.short_of_laps += 1;
        } else if let Some(position) = final_split {
            updates.push((number, row.get(position).clone()));
            summary.completed += 1;
        } else {
            warn!(row = number, max_laps, "No final split column, leaving Time unchanged");
        }
    }

    for (number, cell) in updates {
        table.set_cell(number, time_position, cell);
    }
    summary
}
