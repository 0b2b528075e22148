use thiserror::Error;

/// User-facing CLI error wrapper. Core failures (load, save, render) are
/// reported inline and never abort the loop, so only prompt and usage
/// problems surface here.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("prompt failed: {0}")]
    Prompt(String),
    #[error("{0}")]
    Usage(String),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}
