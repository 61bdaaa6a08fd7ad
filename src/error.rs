use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read page {}: {source}", .path.display())]
    PageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed page: {0}")]
    PageParse(#[source] serde_yaml::Error),

    /// Only seen inside the detail modal, which swaps it for a fallback line.
    #[error("Malformed report payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Report target identifier is empty")]
    EmptyTarget,

    #[error("Outbox {}: {message}", .path.display())]
    Outbox { path: PathBuf, message: String },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl Error {
    pub fn outbox<S: Into<String>>(path: impl Into<PathBuf>, message: S) -> Self {
        Self::Outbox {
            path: path.into(),
            message: message.into(),
        }
    }
}
