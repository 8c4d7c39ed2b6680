use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Could not parse {} at row {row}: {source}", path.display())]
    Parse {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("Could not serialize front matter: {0}")]
    Serialization(#[from] serde_yaml::Error),
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unrecognized talk format {value:?} for session {session_id}")]
    UnrecognizedFormat { session_id: String, value: String },
}

impl ContentError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
