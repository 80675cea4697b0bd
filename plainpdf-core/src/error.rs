use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage an internal invariant failure was detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ObjectGraph,
    Serialization,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ObjectGraph => "object graph",
            Stage::Serialization => "serialization",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input unavailable: {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoding error: character {character:?} on page {page}, line {line} cannot be encoded")]
    EncodingError {
        /// 1-based page number.
        page: usize,
        /// 1-based line number within the page.
        line: usize,
        character: char,
    },

    #[error("Internal invariant violated during {stage}: {message}")]
    InvariantViolation { stage: Stage, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl PdfError {
    pub(crate) fn invariant(stage: Stage, message: impl Into<String>) -> Self {
        PdfError::InvariantViolation {
            stage,
            message: message.into(),
        }
    }

    /// Whether this error signals a defect in the engine rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, PdfError::InvariantViolation { .. })
    }
}

pub type Result<T> = std::result::Result<T, PdfError>;
