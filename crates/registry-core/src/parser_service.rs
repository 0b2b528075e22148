//! Parsing of the fixed-format item-list file into a [`Registry`].

use registry_domain::{Cell, GridPos, Item, Layout, Registry};

use crate::CoreError;

/// Sentinel line in the item-list file that starts a new grid column.
/// Matched case-insensitively after trimming, for compatibility with
/// existing item-list files.
pub const NEW_COLUMN_MARKER: &str = "NEW COLUMN";

pub struct ParserService;

impl ParserService {
    /// Interprets raw item-list lines: the first non-blank line is the
    /// registry title (taken verbatim), blank lines after it are skipped,
    /// and every remaining line becomes an item, a blank separator, or a
    /// column break.
    ///
    /// A file containing only a title is valid and yields an empty layout.
    pub fn parse(lines: &[String]) -> Result<Registry, CoreError> {
        let mut index = 0;
        while index < lines.len() && is_blank(&lines[index]) {
            index += 1;
        }
        let title = lines.get(index).ok_or(CoreError::EmptyInput)?.clone();
        index += 1;
        while index < lines.len() && is_blank(&lines[index]) {
            index += 1;
        }

        let mut layout = Layout::new();
        let mut column = 0u32;
        let mut row = 0u32;
        for line in &lines[index..] {
            if is_new_column_marker(line) {
                column += 1;
                row = 0;
            } else if is_blank(line) {
                layout.push(Cell::Separator(GridPos::new(column, row)));
                row += 1;
            } else {
                layout.push(Cell::Item(Item::new(line.trim(), GridPos::new(column, row))));
                row += 1;
            }
        }
        Ok(Registry::new(title, layout))
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_new_column_marker(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(NEW_COLUMN_MARKER)
}
