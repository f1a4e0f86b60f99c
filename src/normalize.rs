//! Normalization driver.
//!
//! Walks the input table once, appending each row to an [`OutputArena`]
//! either unchanged or as one synthesized row per rider, then runs the
//! whole-table passes from [`crate::postprocess`]. Output order is append
//! order: passthrough rows keep their relative position and the rider rows of
//! a relay entry follow each other, sorted by rider name, where that entry was.

use tracing::{debug, info};

use crate::Result;
use crate::config::NormalizeConfig;
use crate::postprocess::{prune_empty_columns, rewrite_status};
use crate::reconstruct::{
    EntryClassifier, EntryKind, PassthroughReason, RiderRow, RowSynthesizer, Timeline,
    extract_leg_assignments,
};
use crate::roster::RosterIndex;
use crate::types::{
    BIB, CATEGORY, Cell, ColumnId, ResultRow, ResultsSchema, ResultsTable, START, TEAM_NAME, TIME,
};

/// Append-only output table.
///
/// Rows only ever go on the end. Synthesized rows may need columns the input
/// did not have (a `Bib` field, a higher-numbered `Leg`); those are appended
/// to the schema with every earlier row missing them.
#[derive(Debug, Clone)]
pub struct OutputArena {
    table: ResultsTable,
}

impl OutputArena {
    /// Empty arena laid out like `schema`.
    pub fn new(schema: &ResultsSchema) -> Self {
        Self { table: ResultsTable::new(schema.clone()) }
    }

    /// Copy a source row verbatim.
    pub fn append_passthrough(&mut self, row: &ResultRow) {
        self.table.push_row(row.clone());
    }

    /// Lay out a rider row in columns and append it.
    pub fn append_rider_row(&mut self, rider: &RiderRow) {
        let mut cells: Vec<(ColumnId, Cell)> = vec![
            (ColumnId::field(BIB), Cell::parse(&rider.bib)),
            (ColumnId::field(TEAM_NAME), Cell::from(rider.team_name.as_str())),
            (ColumnId::field(CATEGORY), Cell::parse(&rider.category)),
            (ColumnId::field(START), rider.start.clone()),
            (ColumnId::field(TIME), rider.time.clone()),
        ];
        for (offset, leg) in rider.legs.iter().enumerate() {
            let index = offset + 1;
            cells.push((ColumnId::leg(index), Cell::from(leg.rider.as_str())));
            cells.push((ColumnId::split(index), Cell::from(leg.split.as_str())));
            cells.push((ColumnId::lap(index), Cell::from(leg.lap.as_str())));
        }

        let positions: Vec<usize> =
            cells.iter().map(|(id, _)| self.table.ensure_column(id)).collect();
        let mut row = ResultRow::missing(self.table.schema().len());
        for (position, (_, cell)) in positions.into_iter().zip(cells) {
            row.set(position, cell);
        }
        self.table.push_row(row);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn into_table(self) -> ResultsTable {
        self.table
    }
}

/// What a normalization run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub non_starters: usize,
    pub ineligible: usize,
    pub single_rider: usize,
    /// Relay rows split into rider rows
    pub relays_split: usize,
    pub rider_rows: usize,
    /// Rider rows whose identity fell back to the sentinel
    pub roster_misses: usize,
    pub pruned_columns: Vec<String>,
    /// Rows whose Time became a `-N laps` marker
    pub short_of_laps: usize,
}

impl NormalizeReport {
    fn record_passthrough(&mut self, reason: PassthroughReason) {
        match reason {
            PassthroughReason::NonStarter => self.non_starters += 1,
            PassthroughReason::CategoryNotEligible => self.ineligible += 1,
            PassthroughReason::SingleRider => self.single_rider += 1,
        }
    }
}

/// Normalized table together with its run report.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub table: ResultsTable,
    pub report: NormalizeReport,
}

/// Runs the full transform over a loaded results table.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    roster: &'a RosterIndex,
    config: &'a NormalizeConfig,
}

impl<'a> Normalizer<'a> {
    pub fn new(roster: &'a RosterIndex, config: &'a NormalizeConfig) -> Self {
        Self { roster, config }
    }

    /// Normalize `input`.
    ///
    /// # Errors
    ///
    /// Fails on the first lap time of an eligible row that is missing or does
    /// not parse. Single-rider rows are checked too, although they pass through.
    pub fn normalize(&self, input: &ResultsTable) -> Result<Normalized> {
        let classifier = EntryClassifier::new(self.config);
        let synthesizer = RowSynthesizer::new(self.roster);
        let mut arena = OutputArena::new(input.schema());
        let mut report = NormalizeReport { input_rows: input.len(), ..Default::default() };

        for row in input.views() {
            match classifier.classify(&row) {
                EntryKind::Passthrough(reason) => {
                    if reason == PassthroughReason::SingleRider {
                        Timeline::build(row.number(), &extract_leg_assignments(&row))?;
                    }
                    debug!(row = row.number(), ?reason, "Passing row through");
                    report.record_passthrough(reason);
                    arena.append_passthrough(row.row());
                }
                EntryKind::Team(legs) => {
                    let timeline = Timeline::build(row.number(), &legs)?;
                    let groups = timeline.rider_groups();
                    debug!(
                        row = row.number(),
                        legs = legs.len(),
                        riders = groups.len(),
                        "Splitting relay row"
                    );

                    report.relays_split += 1;
                    for group in &groups {
                        let rider_row = synthesizer.synthesize(&row, group);
                        if !rider_row.in_roster {
                            report.roster_misses += 1;
                        }
                        arena.append_rider_row(&rider_row);
                        report.rider_rows += 1;
                    }
                }
            }
        }

        let mut table = arena.into_table();
        report.pruned_columns = prune_empty_columns(&mut table);
        report.short_of_laps = rewrite_status(&mut table).short_of_laps;
        report.output_rows = table.len();

        info!(
            input_rows = report.input_rows,
            output_rows = report.output_rows,
            relays_split = report.relays_split,
            rider_rows = report.rider_rows,
            roster_misses = report.roster_misses,
            pruned = report.pruned_columns.len(),
            "Normalization complete"
        );

        Ok(Normalized { table, report })
    }
}
