use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a classification run. None of these are recovered
/// mid-pipeline; callers propagate them up to `main`.
#[derive(Debug, Error)]
pub enum FlowTagError {
    #[error("Header {name} is not present in the headers")]
    MissingHeader { name: String },

    #[error("Invalid header in the Flow Log file")]
    InvalidHeader,

    #[error("Tag map is not valid")]
    InvalidConfiguration,

    #[error("line {line}: record has too few fields")]
    MalformedRecord { line: usize },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlowTagError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FlowTagError::Io {
            path: path.into(),
            source,
        }
    }
}
