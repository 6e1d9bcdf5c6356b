use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("path segment at index {index} is not a primitive")]
    NonPrimitivePathSegment { index: usize },
}
