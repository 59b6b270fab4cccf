use crate::log;
use derive_more::{Display, Error};

/// Errors raised by the checked vector operations
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError
{
    /// A component index was outside `0..dimension`
    #[display("Index {index} is out of range for a vector of dimension {dimension}")]
    IndexOutOfRange
    {
        /// The index that was requested
        index:     usize,
        /// The dimension of the vector it was requested from
        dimension: usize,
    },
    /// A runtime sequence did not hold exactly as many values as the vector has components
    #[display("Expected {expected} components but got {actual}")]
    DimensionMismatch
    {
        /// The dimension of the target vector
        expected: usize,
        /// The number of values supplied
        actual:   usize,
    },
}

impl log::ProjectError for VectorError
{
    fn title(&self) -> String
    {
        String::from(match *self {
            VectorError::IndexOutOfRange { .. } => "Index",
            VectorError::DimensionMismatch { .. } => "Dimension",
        })
    }
}

/// Result of a checked vector operation
pub type Result<T> = std::result::Result<T, VectorError>;

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::log::ProjectError;

    #[test]
    fn index_out_of_range_message()
    {
        let err = VectorError::IndexOutOfRange { index: 3, dimension: 2 };
        assert_eq!(err.to_string(), "Index 3 is out of range for a vector of dimension 2");
        assert_eq!(err.title(), "Index");
    }

    #[test]
    fn dimension_mismatch_message()
    {
        let err = VectorError::DimensionMismatch { expected: 3, actual: 5 };
        assert_eq!(err.to_string(), "Expected 3 components but got 5");
        assert_eq!(err.title(), "Dimension");
    }

    #[test]
    fn is_std_error()
    {
        let err: Box<dyn std::error::Error> = Box::new(VectorError::DimensionMismatch { expected: 2, actual: 0 });
        assert!(err.source().is_none());
    }
}
