//! Application-scope state and the user-facing actions.

use chrono::NaiveDate;
use registry_domain::{Layout, Registry, Submission, Transcript};

use crate::{
    parser_service::ParserService,
    print_service::{PageRenderer, PrintService, LINES_PER_PAGE},
    storage::TranscriptLog,
    submission_service::SubmissionService,
    CoreError,
};

/// Holds all mutable registry state for one application session: the parsed
/// registry (absent when loading failed) and the accumulated transcript.
/// The UI layer forwards each user action here; it never owns the
/// authoritative selection state.
pub struct RegistryApp {
    registry: Option<Registry>,
    transcript: Transcript,
}

impl RegistryApp {
    /// Parses raw item-list lines into a ready application state.
    pub fn from_lines(lines: &[String]) -> Result<Self, CoreError> {
        Ok(Self::new(ParserService::parse(lines)?))
    }

    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Some(registry),
            transcript: Transcript::new(),
        }
    }

    /// Degraded mode used when the item list could not be loaded: no title,
    /// no items, but guest-name-only submissions still work.
    pub fn without_items() -> Self {
        Self {
            registry: None,
            transcript: Transcript::new(),
        }
    }

    pub fn registry(&self) -> Option<&Registry> {
        self.registry.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.registry.as_ref().map(|registry| registry.title.as_str())
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.registry.as_ref().map(|registry| &registry.layout)
    }

    /// Mutable access for the UI layer to mirror checkbox changes into the
    /// authoritative selection state.
    pub fn layout_mut(&mut self) -> Option<&mut Layout> {
        self.registry.as_mut().map(|registry| &mut registry.layout)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The submit action: records the current selection under `guest_name`,
    /// locks the recorded items and prepends the submission to the
    /// transcript.
    pub fn submit(&mut self, guest_name: &str) -> Submission {
        let submission = match self.registry.as_mut() {
            Some(registry) => SubmissionService::submit(guest_name, &mut registry.layout),
            None => Submission::new(guest_name, Vec::new()),
        };
        self.transcript.prepend(submission.clone());
        submission
    }

    /// The print action: paginates the transcript and renders every page to
    /// `renderer`. Returns the number of pages rendered; zero when the
    /// transcript is empty.
    pub fn print_to(
        &self,
        renderer: &mut dyn PageRenderer,
        date: NaiveDate,
    ) -> Result<u32, CoreError> {
        let lines = self.transcript.lines();
        let title = self.title().unwrap_or_default();
        PrintService::print_all(title, date, &lines, LINES_PER_PAGE, renderer)
    }

    /// The save/clear action: appends the transcript to `log` when there is
    /// anything meaningful to save, then resets every item and clears the
    /// transcript. The reset and clear happen even when the append failed,
    /// matching the reference behavior; the error is still returned so the
    /// UI can report it.
    pub fn save_and_clear(
        &mut self,
        guest_name: &str,
        log: &dyn TranscriptLog,
    ) -> Result<(), CoreError> {
        let result = self.save(guest_name, log);
        if let Some(registry) = self.registry.as_mut() {
            SubmissionService::reset_all(&mut registry.layout);
        }
        self.transcript.clear();
        result
    }

    /// The exit action: one final append attempt before the process
    /// terminates. Does not clear anything.
    pub fn save_on_exit(
        &self,
        guest_name: &str,
        log: &dyn TranscriptLog,
    ) -> Result<(), CoreError> {
        self.save(guest_name, log)
    }

    fn save(&self, guest_name: &str, log: &dyn TranscriptLog) -> Result<(), CoreError> {
        log.append_if_non_empty(guest_name, self.layout(), &self.transcript)
    }
}
