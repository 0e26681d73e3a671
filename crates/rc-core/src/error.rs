use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    OutOfBounds,
    InvalidStride,
    /// Input that no polar analysis can be run on, e.g. an empty image.
    InvalidInput(&'static str),
    /// The rotation radius resolved to zero for this image size.
    NumericDegeneracy { radius: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::OutOfBounds => write!(f, "out of bounds"),
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::InvalidInput(what) => write!(f, "invalid input: {what}"),
            Self::NumericDegeneracy { radius } => {
                write!(f, "degenerate polar radius {radius}")
            }
        }
    }
}

impl std::error::Error for Error {}
