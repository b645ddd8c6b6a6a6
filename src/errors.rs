//! Error types for mergestats.

// error_chain! generates items that cannot carry doc comments, so the
// crate-wide `deny(missing_docs)` has to be relaxed for this module.
#![allow(missing_docs)]

// Creates the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    errors {
        NoData {
            description("no data to aggregate")
        }
        MissingColumn(name: String) {
            description("column missing from input table")
            display("column '{}' missing from input table", name)
        }
        RowOutOfRange(index: usize) {
            description("row index out of range")
            display("row index {} out of range", index)
        }
    }

    foreign_links {
        Io(::std::io::Error);
        Csv(::csv::Error);
    }
}
