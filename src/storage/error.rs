use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the review store and its snapshot file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),

    #[error("Snapshot I/O failed for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot {path:?} is not a valid review list: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
