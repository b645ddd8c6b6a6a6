//! Serialization of aggregated tables back to delimited files.

use csv;
use errors::*;
use merge::OutputTable;
use std::fs;
use std::path::Path;

/// Prepares `path` for a fresh write: creates the parent directory and
/// removes any stale output left by a previous run, so an old merged file is
/// never picked up as input later. Both steps are best effort; a real
/// filesystem problem surfaces when the file is written.
pub fn ensure_output<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::remove_file(path);
}

/// Writes `table` to `path`: a header line with the column names, then one
/// line per row with the cells in column order. An empty table is rejected
/// with `NoData` rather than producing a headerless file.
pub fn write_table<P: AsRef<Path>>(path: P, table: &OutputTable) -> Result<()> {
    if table.is_empty() {
        bail!(ErrorKind::NoData);
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use merge::OutputTable;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile;

    fn sample() -> OutputTable {
        OutputTable::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![1.5, 2.0], vec![3.0, 4.0]],
        )
    }

    #[test]
    fn writes_header_then_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_table(&path, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "A,B\n1.5,2.0\n3.0,4.0\n");
    }

    #[test]
    fn nan_cells_are_written_as_nan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table =
            OutputTable::new(vec!["A".to_string()], vec![vec![::std::f64::NAN]]);
        write_table(&path, &table).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "A\nNaN\n");
    }

    #[test]
    fn empty_table_is_fatal_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let empty = OutputTable::new(vec!["A".to_string()], Vec::new());
        assert!(write_table(&path, &empty).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn ensure_output_removes_a_stale_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut stale = File::create(&path).unwrap();
        stale.write_all(b"old contents\n").unwrap();
        drop(stale);

        ensure_output(&path);
        assert!(!path.exists());
    }

    #[test]
    fn ensure_output_tolerates_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        ensure_output(dir.path().join("never-written.csv"));
    }

    #[test]
    fn ensure_output_creates_the_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        ensure_output(&path);
        assert!(path.parent().unwrap().is_dir());
    }
}
