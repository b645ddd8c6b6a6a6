//! Discovery of input log files.

use errors::*;
use std::fs;
use std::path::Path;

/// Returns the names of regular files directly inside `dir` whose name ends
/// with `.<extension>`. Subdirectories are not searched. Names are sorted so
/// that "first file" semantics for identifier columns do not depend on the
/// filesystem's enumeration order.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<String>> {
    let suffix = format!(".{}", extension);
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if let Some(name) = name.to_str() {
            if name.ends_with(&suffix) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
