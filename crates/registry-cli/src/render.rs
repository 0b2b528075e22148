use std::io::{self, Write};

use registry_core::{print_service::PageRenderer, CoreError};
use registry_domain::Page;

/// Renders pages to stdout, standing in for a physical printer.
#[derive(Default)]
pub struct StdoutPageRenderer;

impl PageRenderer for StdoutPageRenderer {
    fn render(&mut self, page: &Page) -> Result<(), CoreError> {
        let mut stdout = io::stdout();
        stdout
            .write_all(page.to_text().as_bytes())
            .and_then(|_| writeln!(stdout, "--- end of page {} ---", page.number))
            .map_err(|err| CoreError::Render(err.to_string()))
    }
}
