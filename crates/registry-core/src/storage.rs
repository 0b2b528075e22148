use registry_domain::{Layout, Transcript};

use crate::CoreError;

/// Abstraction over the append-only transcript log.
pub trait TranscriptLog {
    /// Appends one separator block followed by the transcript's flattened
    /// lines. Creates the log if absent.
    fn append(&self, transcript: &Transcript) -> Result<(), CoreError>;

    /// Appends only when there is something meaningful to save; otherwise
    /// a no-op that does not touch (or create) the log.
    fn append_if_non_empty(
        &self,
        guest_name: &str,
        layout: Option<&Layout>,
        transcript: &Transcript,
    ) -> Result<(), CoreError> {
        if has_content_to_save(guest_name, layout) {
            self.append(transcript)
        } else {
            Ok(())
        }
    }
}

/// "Something meaningful to save" means a guest name has been entered or at
/// least one item is currently selected.
pub fn has_content_to_save(guest_name: &str, layout: Option<&Layout>) -> bool {
    !guest_name.is_empty() || layout.map(Layout::any_selected).unwrap_or(false)
}
