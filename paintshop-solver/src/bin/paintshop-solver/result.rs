use std::path::PathBuf;

use paintshop_solver::ConstraintOperationError;
use thiserror::Error;

use crate::parsers::paintshop::ParseError;

pub(crate) type PaintshopResult<T> = Result<T, PaintshopError>;

#[derive(Error, Debug)]
pub(crate) enum PaintshopError {
    #[error("Failed to read {}, more details: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("The instance file is invalid, more details: {0}")]
    MalformedInput(#[from] ParseError),
    #[error("The instance contains an invalid customer, more details: {0}")]
    InvalidClause(#[from] ConstraintOperationError),
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
}

impl PaintshopError {
    pub(crate) fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// The process exit code reported for this error.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            PaintshopError::SourceUnavailable { .. } => 2,
            PaintshopError::MalformedInput(_) | PaintshopError::InvalidClause(_) => 3,
            PaintshopError::Io(_) => 1,
        }
    }
}
