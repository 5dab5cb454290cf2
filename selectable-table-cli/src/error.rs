//! CLI error type

use std::path::PathBuf;

use selectable_table::error::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid render document: {0}")]
    Document(#[from] serde_json::Error),
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
