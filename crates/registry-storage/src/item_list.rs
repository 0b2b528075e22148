//! Loader for the fixed-format item-list file.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};

use registry_core::CoreError;

/// Maximum number of lines read from the item-list file. Lines beyond the
/// cap are silently ignored, preserving the historical file-format
/// behavior.
pub const MAX_LINES: usize = 200;

/// Reads the item-list file into ordered lines with trailing newlines
/// stripped. A missing file is reported distinctly as
/// [`CoreError::ItemListNotFound`]; any other failure surfaces as
/// [`CoreError::Io`]. No partial result on failure.
pub fn load_item_lines(path: &Path) -> Result<Vec<String>, CoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(CoreError::ItemListNotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        if lines.len() >= MAX_LINES {
            break;
        }
        lines.push(line?);
    }
    Ok(lines)
}
