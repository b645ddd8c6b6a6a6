//! Reduction of aligned tables into per-cell average and median summaries.

use average::{Estimate, MeanWithError};
use errors::*;
use table::Table;

/// Columns that identify the experiment configuration. Every file carries the
/// same value, so the first parsed one is copied instead of being reduced.
pub const IDENTIFIER_COLUMNS: [&'static str; 2] = ["Skew", "Goal"];

/// An aggregated table in the same shape as the inputs: one `f64` cell per
/// input row index and column.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl OutputTable {
    /// Builds an output table from pre-aggregated rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        OutputTable {
            columns: columns,
            rows: rows,
        }
    }

    /// Column names in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Aggregated rows, cells in column order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// True when there are no rows to serialize.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reduces `tables` cell by cell and returns the average table and the median
/// table. Row count and column order come from the first table; the inputs
/// are assumed to share its shape. Fails with `NoData` when no table was
/// loaded at all.
pub fn merge_tables(tables: &[Table]) -> Result<(OutputTable, OutputTable)> {
    let first = match tables.first() {
        Some(t) => t,
        None => bail!(ErrorKind::NoData),
    };
    let columns = first.columns().to_vec();
    let row_count = first.row_count();

    let mut avg_rows = Vec::with_capacity(row_count);
    let mut median_rows = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let mut avg_row = Vec::with_capacity(columns.len());
        let mut median_row = Vec::with_capacity(columns.len());
        for column in &columns {
            let values = collect_values(tables, row, column)?;
            let (avg, med) = reduce(column, &values);
            avg_row.push(avg);
            median_row.push(med);
        }
        avg_rows.push(avg_row);
        median_rows.push(median_row);
    }

    Ok((
        OutputTable::new(columns.clone(), avg_rows),
        OutputTable::new(columns, median_rows),
    ))
}

/// Gathers the parsable values at (`row`, `column`) across all tables, in
/// table order. Unparsable cells are logged and skipped; NaN cells are
/// skipped without a diagnostic.
fn collect_values(tables: &[Table], row: usize, column: &str) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(tables.len());
    for table in tables {
        let raw = table.value(row, column)?;
        match raw.trim().parse::<f64>() {
            Ok(v) => {
                if !v.is_nan() {
                    values.push(v);
                }
            }
            Err(_) => warn!("not a float: {:?}", raw),
        }
    }
    Ok(values)
}

/// Returns the (average, median) pair for one cell. Identifier columns keep
/// the first observed value in both outputs; an empty candidate list yields
/// NaN in both.
fn reduce(column: &str, values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (::std::f64::NAN, ::std::f64::NAN);
    }
    if IDENTIFIER_COLUMNS.iter().any(|&c| c == column) {
        (values[0], values[0])
    } else {
        (mean(values), median(values))
    }
}

fn mean(values: &[f64]) -> f64 {
    let mut m = MeanWithError::default();
    for &v in values {
        m.add(v);
    }
    m.mean()
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    // NaN is filtered before this point, so the comparison is total.
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
