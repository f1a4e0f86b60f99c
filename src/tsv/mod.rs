//! Tab-delimited reading and writing of results and roster tables.

mod reader;
mod writer;

pub use reader::{read_results, read_results_from, read_roster, read_roster_from};
pub use writer::{render_cell, write_results, write_results_to};
