/// Error types shared by the evaluation pipeline crates.
///
/// These errors represent filesystem failures around the plaintext documents the pipeline
/// consumes and produces. Each variant keeps the offending path so the final report says
/// which file broke the run. Application-specific errors wrap `CommonError` via `#[from]`.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("failed to list directory {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CommonError {
    /// The underlying I/O error kind, regardless of which operation failed.
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            CommonError::ListDir { source, .. }
            | CommonError::Read { source, .. }
            | CommonError::Write { source, .. } => source.kind(),
        }
    }
}
