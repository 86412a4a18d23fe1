use crate::types::LabelValue;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A label other than growth (0) or recession (1) turned up while scanning a label sequence.
    MultiClassError(LabelValue),
    /// A per-instance cost vector was requested for an unrecognized label.
    InvalidLabelError(LabelValue),
    /// The sampling collaborator returned features and labels with different row counts.
    SamplingContractViolation {
        feature_rows: usize,
        label_count: usize,
    },
    /// Weight computation would divide by zero.
    DegenerateCostModelError(String),
    NegativeCostError(String),
    ShapeMismatchError {
        feature_rows: usize,
        label_count: usize,
    },
    UnknownSamplingMethodError(String),
    SamplingError(String),
    ParserError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MultiClassError(value) => write!(
                f,
                "Multi Class Error: more than 2 classes found in dataset (label {})",
                value
            ),
            Error::InvalidLabelError(value) => {
                write!(f, "Invalid Label Error: unrecognized label {}", value)
            }
            Error::SamplingContractViolation {
                feature_rows,
                label_count,
            } => write!(
                f,
                "Sampling Contract Violation: sampler returned {} feature rows but {} labels",
                feature_rows, label_count
            ),
            Error::DegenerateCostModelError(msg) => {
                write!(f, "Degenerate Cost Model Error: {}", msg)
            }
            Error::NegativeCostError(msg) => write!(f, "Negative Cost Error: {}", msg),
            Error::ShapeMismatchError {
                feature_rows,
                label_count,
            } => write!(
                f,
                "Shape Mismatch Error: {} feature rows but {} labels",
                feature_rows, label_count
            ),
            Error::UnknownSamplingMethodError(name) => {
                write!(f, "Unknown Sampling Method Error: {}", name)
            }
            Error::SamplingError(msg) => write!(f, "Sampling Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}
