//! Guest submissions and the accumulated transcript.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One guest's claim: the guest name verbatim (empty allowed) and the
/// claimed item labels in layout order.
pub struct Submission {
    pub guest_name: String,
    pub labels: Vec<String>,
}

impl Submission {
    pub fn new(guest_name: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            guest_name: guest_name.into(),
            labels,
        }
    }

    /// The submission as display lines: the guest name, then one line per
    /// claimed label.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.labels.len() + 1);
        lines.push(self.guest_name.clone());
        lines.extend(self.labels.iter().cloned());
        lines
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Running list of submissions, newest first. Grows until explicitly
/// cleared by the save/clear action.
pub struct Transcript {
    submissions: Vec<Submission>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a submission at the top of the transcript.
    pub fn prepend(&mut self, submission: Submission) {
        self.submissions.insert(0, submission);
    }

    pub fn clear(&mut self) {
        self.submissions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn newest(&self) -> Option<&Submission> {
        self.submissions.first()
    }

    /// Flattens the transcript into display lines, newest submission first,
    /// with a single blank line between submission blocks. This is the view
    /// both the paginator and the log appender consume.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (index, submission) in self.submissions.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.extend(submission.lines());
        }
        lines
    }

    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}
