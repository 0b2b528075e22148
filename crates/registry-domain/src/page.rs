//! A single printable page of the transcript.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used in page headers.
pub const PAGE_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One page of transcript lines plus its header. Pages are ephemeral,
/// produced per print request and discarded after rendering.
pub struct Page {
    pub number: u32,
    pub header: String,
    pub lines: Vec<String>,
}

impl Page {
    pub fn new(title: &str, date: NaiveDate, number: u32, lines: Vec<String>) -> Self {
        Self {
            number,
            header: Self::header_for(title, date, number),
            lines,
        }
    }

    /// Header placed at the top of every page: title, date and page number.
    pub fn header_for(title: &str, date: NaiveDate, number: u32) -> String {
        format!("{}   {}   Page {}", title, date.format(PAGE_DATE_FORMAT), number)
    }

    /// The full page as text: header, a blank line, then the page lines.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.header);
        text.push_str("\n\n");
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
