//! Resource error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while creating or accessing a [`Resource`](crate::Resource).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceError {
    /// The system could not provide a buffer of the requested length,
    /// either because the allocator refused or the byte size overflowed.
    AllocationFailure {
        /// Number of `i32` elements requested.
        requested: usize,
    },
    /// The requested length exceeds the configured element ceiling.
    CapacityExceeded {
        /// Number of `i32` elements requested.
        requested: usize,
        /// Configured maximum element count.
        max: usize,
    },
    /// A checked accessor was given an index outside `0..len`.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the resource at the time of access.
        len: usize,
    },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure { requested } => {
                write!(f, "allocation failed: requested {requested} elements")
            }
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} elements, max {max} elements"
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for resource of length {len}")
            }
        }
    }
}

impl Error for ResourceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_allocation_failure() {
        let err = ResourceError::AllocationFailure { requested: 42 };
        assert_eq!(err.to_string(), "allocation failed: requested 42 elements");
    }

    #[test]
    fn display_capacity_exceeded() {
        let err = ResourceError::CapacityExceeded {
            requested: 11,
            max: 10,
        };
        assert_eq!(
            err.to_string(),
            "capacity exceeded: requested 11 elements, max 10 elements"
        );
    }

    #[test]
    fn display_index_out_of_range() {
        let err = ResourceError::IndexOutOfRange { index: 10, len: 10 };
        assert_eq!(
            err.to_string(),
            "index 10 out of range for resource of length 10"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn Error> = Box::new(ResourceError::AllocationFailure { requested: 1 });
        assert!(err.source().is_none());
    }
}
