//! Loading a delimited log file into an ordered row/column table.

use csv;
use errors::*;
use std::io::Read;
use std::path::Path;

/// One parsed input file: column names from the header line plus an ordered
/// sequence of raw string rows.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl Table {
    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows (the header line is not a row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Looks up the raw cell at `row` for the named column. Inputs are
    /// assumed same-shaped; a file that breaks that assumption surfaces here
    /// as a hard error instead of a silently misaligned reduction.
    pub fn value(&self, row: usize, column: &str) -> Result<&str> {
        let index = self.columns.iter().position(|c| c == column).ok_or_else(
            || {
                Error::from(ErrorKind::MissingColumn(column.to_string()))
            },
        )?;
        let record = self.rows.get(row).ok_or_else(|| {
            Error::from(ErrorKind::RowOutOfRange(row))
        })?;
        record.get(index).ok_or_else(|| {
            Error::from(ErrorKind::MissingColumn(column.to_string()))
        })
    }
}

/// Reads one CSV log file into a `Table`. The first line defines the column
/// names; every subsequent line becomes one row.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    collect(csv::Reader::from_path(path)?)
}

/// Parses CSV content from any reader (file, string, etc.) into a `Table`.
pub fn load_from_reader<R: Read>(rdr: R) -> Result<Table> {
    collect(csv::Reader::from_reader(rdr))
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Table> {
    let columns = reader.headers()?.iter().map(|c| c.to_string()).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }
    Ok(Table {
        columns: columns,
        rows: rows,
    })
}
