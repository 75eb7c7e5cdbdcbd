use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use crate::initialization::RandErr;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, FitErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum FitErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    NotSingleColumn {
        got: usize,
    },
    EmptyDataset,
    NonFiniteCost {
        cost: f64,
    },
    NonFiniteGradient,
    InvalidSplit {
        ratio: f64,
        len: usize,
    },
    Rand(RandErr),
    Io(io::Error),
    Config(serde_json::Error),
}

impl FitErr {
    /// Whether this error belongs to the shape family (dimension inconsistencies).
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            FitErr::SizeMismatch { .. }
                | FitErr::RaggedRow { .. }
                | FitErr::NotSingleColumn { .. }
                | FitErr::EmptyDataset
        )
    }

    /// Whether this error means the model left the probability domain.
    pub fn is_numerical(&self) -> bool {
        matches!(self, FitErr::NonFiniteCost { .. } | FitErr::NonFiniteGradient)
    }
}

impl Display for FitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            FitErr::RaggedRow { row, got, expected } => write!(
                f,
                "row {row} has {got} features, expected {expected} like the first row"
            ),
            FitErr::NotSingleColumn { got } => {
                write!(f, "labels must be a single column, got {got} columns")
            }
            FitErr::EmptyDataset => write!(f, "the dataset has no examples or no features"),
            FitErr::NonFiniteCost { cost } => write!(
                f,
                "the cost evaluated to {cost}, the activation left the (0, 1) domain"
            ),
            FitErr::NonFiniteGradient => write!(f, "the gradient has non-finite components"),
            FitErr::InvalidSplit { ratio, len } => write!(
                f,
                "cannot split {len} examples with ratio {ratio} into two non-empty parts"
            ),
            FitErr::Rand(e) => write!(f, "random initialization error: {e}"),
            FitErr::Io(e) => write!(f, "io error: {e}"),
            FitErr::Config(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for FitErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FitErr::Rand(e) => Some(e),
            FitErr::Io(e) => Some(e),
            FitErr::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FitErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RandErr> for FitErr {
    fn from(value: RandErr) -> Self {
        Self::Rand(value)
    }
}

impl From<serde_json::Error> for FitErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}
