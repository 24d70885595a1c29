use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No such file or directory: '{path}'")]
    PathNotFound { path: String },

    #[error("Permission denied: '{path}'")]
    PermissionDenied { path: String },

    #[error("Disk usage query failed for '{path}': {source}")]
    Query {
        path: String,
        #[source]
        source: Errno,
    },

    #[error("Cannot create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write report {}: {source}", .path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot append to log {}: {source}", .path.display())]
    AppendLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    /// Classify a failed disk query by errno
    pub fn from_query(path: impl Into<String>, errno: Errno) -> Self {
        let path = path.into();
        match errno {
            Errno::ENOENT | Errno::ENOTDIR => ReportError::PathNotFound { path },
            Errno::EACCES | Errno::EPERM => ReportError::PermissionDenied { path },
            source => ReportError::Query { path, source },
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
