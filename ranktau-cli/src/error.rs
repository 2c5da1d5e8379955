/// Errors surfaced by the batch runner. Any one of them stops the run.
use ranktau_core::CorrelationError;
use std::path::PathBuf;
use thiserror::Error;

/// A token in a ranking file that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: expected an integer rank, got {token:?}")]
pub struct RankParseError {
    /// 1-based line number.
    pub line: usize,
    pub token: String,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: RankParseError,
    },

    #[error("Found {masters} master ranking files but {students} student ranking files")]
    PairCountMismatch { masters: usize, students: usize },

    #[error("No ranking files match {pattern}")]
    NoPairs { pattern: String },

    #[error("{} vs {}: {source}", master.display(), student.display())]
    Correlation {
        master: PathBuf,
        student: PathBuf,
        #[source]
        source: CorrelationError,
    },
}
