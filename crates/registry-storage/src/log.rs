//! Append-only plain-text log of saved transcripts.

use std::{
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use registry_core::{storage::TranscriptLog, CoreError};
use registry_domain::Transcript;

/// Separator line written before every appended transcript block.
const SEPARATOR: &str = "========================================";

/// Transcript log backed by a single append-only file. The file (and its
/// parent directory) is created on the first append; the no-op gate of
/// [`TranscriptLog::append_if_non_empty`] never touches the filesystem.
pub struct FileTranscriptLog {
    path: PathBuf,
}

impl FileTranscriptLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranscriptLog for FileTranscriptLog {
    fn append(&self, transcript: &Transcript) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", SEPARATOR)?;
        writeln!(writer)?;
        for line in transcript.lines() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }
}
