//! Pagination of transcript lines and the rendering seam.

use chrono::NaiveDate;
use registry_domain::Page;

use crate::CoreError;

/// Lines per printed page.
pub const LINES_PER_PAGE: usize = 40;

/// Output device for rendered pages (a printer, stdout, a file). Render
/// failures are reported to the user and never treated as fatal.
pub trait PageRenderer {
    fn render(&mut self, page: &Page) -> Result<(), CoreError>;
}

pub struct PrintService;

impl PrintService {
    /// Splits `lines` into pages of at most `page_size` lines, numbering
    /// them from 1. Pure function of its inputs; call again to restart.
    /// Empty input yields no pages.
    pub fn paginate<'a>(
        title: &'a str,
        date: NaiveDate,
        lines: &'a [String],
        page_size: usize,
    ) -> Pages<'a> {
        Pages {
            title,
            date,
            chunks: lines.chunks(page_size.max(1)),
            number: 0,
        }
    }

    /// Renders every page to `renderer`, stopping at the first failure.
    /// Returns the number of pages rendered.
    pub fn print_all(
        title: &str,
        date: NaiveDate,
        lines: &[String],
        page_size: usize,
        renderer: &mut dyn PageRenderer,
    ) -> Result<u32, CoreError> {
        let mut rendered = 0;
        for page in Self::paginate(title, date, lines, page_size) {
            renderer.render(&page)?;
            rendered += 1;
        }
        Ok(rendered)
    }
}

/// Lazy iterator over the pages of a line list.
pub struct Pages<'a> {
    title: &'a str,
    date: NaiveDate,
    chunks: std::slice::Chunks<'a, String>,
    number: u32,
}

impl Iterator for Pages<'_> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let chunk = self.chunks.next()?;
        self.number += 1;
        Some(Page::new(self.title, self.date, self.number, chunk.to_vec()))
    }
}
