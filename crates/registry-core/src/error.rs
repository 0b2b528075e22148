use std::{io, path::PathBuf};

use thiserror::Error;

/// Unified error type for the core and storage layers. Every variant is
/// recoverable at the application boundary: a failed load degrades the UI
/// to guest-name-only input and a failed append or render is reported,
/// never fatal.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("item list not found: {0}")]
    ItemListNotFound(PathBuf),
    #[error("item list has no usable title line")]
    EmptyInput,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("page rendering failed: {0}")]
    Render(String),
}
