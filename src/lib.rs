//! Merge a directory of same-shaped CSV experiment logs into two summary
//! files: per-cell arithmetic means and per-cell medians across runs.
//!
//! Each input file is one run of the same experiment, so all files share a
//! header and a row count. For every row index and column, the values across
//! files are reduced to a mean and a median, except for the identifier
//! columns (`Skew`, `Goal`) whose value is copied from the first file that
//! provides one.
#![recursion_limit = "1024"]
#![deny(missing_docs)]

extern crate average;
extern crate csv;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[cfg(test)]
extern crate tempfile;

pub mod errors;
mod listing;
mod merge;
mod output;
mod table;

pub use listing::list_files;
pub use merge::{merge_tables, OutputTable, IDENTIFIER_COLUMNS};
pub use output::{ensure_output, write_table};
pub use table::{load_from_reader, load_table, Table};

use errors::*;
use std::path::Path;

/// Extension of the input log files and of the generated summaries.
pub const LOG_EXT: &'static str = "csv";

/// Runs the whole merge: discovers `.csv` logs in `dir`, loads them,
/// aggregates them, and writes `<prefix>_avg.csv` and `<prefix>_median.csv`
/// next to the inputs.
pub fn merge_directory<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<()> {
    let dir = dir.as_ref();
    let avg_path = dir.join(format!("{}_avg.{}", prefix, LOG_EXT));
    let median_path = dir.join(format!("{}_median.{}", prefix, LOG_EXT));

    // The summaries land in the input directory, so stale ones from an
    // earlier run must be removed before the directory is listed.
    ensure_output(&avg_path);
    ensure_output(&median_path);

    let mut tables = Vec::new();
    for name in list_files(dir, LOG_EXT)? {
        info!("{}", name);
        tables.push(load_table(dir.join(&name))?);
    }

    let (avg, median) = merge_tables(&tables)?;
    write_table(&avg_path, &avg)?;
    write_table(&median_path, &median)?;
    Ok(())
}
