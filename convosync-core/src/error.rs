use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvoSyncError {
    #[error("IO error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at {}:{line}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A field the merge needs is missing or null on the record it reads.
    #[error("Missing `{field}` on the {record}")]
    MissingField {
        field: &'static str,
        record: &'static str,
    },

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ConvoSyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvoSyncError>;
