//! Error taxonomy for the report pipeline
//!
//! Every failure in the pipeline is one of three kinds. There is no retry
//! and no partial output: the first error aborts the run and is mapped to a
//! distinct message and exit code at the top-level boundary in `main`.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal pipeline failure.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required input directory or file is missing, unreadable, or not
    /// valid UTF-8.
    #[error("cannot read {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The markdown rendering service is unreachable or rejected the request.
    #[error("markdown rendering failed: {reason}")]
    Network { reason: String },

    /// The output directory or an artifact file could not be written.
    #[error("cannot write {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Build a `Filesystem` error for a path.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Build a `Persistence` error for a path.
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Short operator-facing label for this failure kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Filesystem { .. } => "input problem",
            Self::Network { .. } => "rendering service problem",
            Self::Persistence { .. } => "output problem",
        }
    }

    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Filesystem { .. } => 2,
            Self::Network { .. } => 3,
            Self::Persistence { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let fs = ReportError::filesystem("raw/tasks", std::io::Error::other("missing"));
        let net = ReportError::Network {
            reason: "timed out".to_string(),
        };
        let out = ReportError::persistence("out.md", std::io::Error::other("denied"));

        assert_eq!(fs.exit_code(), 2);
        assert_eq!(net.exit_code(), 3);
        assert_eq!(out.exit_code(), 4);
    }

    #[test]
    fn test_labels() {
        let net = ReportError::Network {
            reason: "503".to_string(),
        };
        assert_eq!(net.label(), "rendering service problem");
    }
}
