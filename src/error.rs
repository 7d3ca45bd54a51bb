use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::SeriesKind;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

/// Every way a comparison run can fail. None of these are recovered from;
/// `main` reports the error and exits.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} ({series}): {message}")]
    Parse {
        line: usize,
        series: SeriesKind,
        message: String,
    },

    /// File stem does not carry `<curve-set>_<algorithm>`.
    #[error("dataset name '{name}' must contain at least two '_'-separated tokens")]
    DatasetName { name: String },

    #[error("SHORTEST_CERTIFICATE average is zero, improvement factor is undefined")]
    DivisionByZero,

    #[error("cannot place x-axis ticks: {reason}")]
    DegenerateAxis { reason: String },
}

pub type Result<T> = std::result::Result<T, CompareError>;
