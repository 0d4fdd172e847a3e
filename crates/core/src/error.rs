//! Error types for Arbor indexes.

use core::fmt;

/// Result type alias for Arbor operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for Arbor index operations.
///
/// Construction is the only fallible step: a tree built with a valid minimum
/// degree can absorb any sequence of inserts and lookups without further
/// error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested minimum degree cannot form a valid B-tree.
    InvalidDegree {
        min_degree: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDegree { min_degree } => {
                write!(f, "Invalid minimum degree {}: must be at least 2", min_degree)
            }
        }
    }
}

impl Error {
    /// Creates an invalid degree error.
    pub fn invalid_degree(min_degree: usize) -> Self {
        Error::InvalidDegree { min_degree }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_degree(0);
        assert!(err.to_string().contains("Invalid minimum degree 0"));

        let err = Error::invalid_degree(1);
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::invalid_degree(1);
        match err {
            Error::InvalidDegree { min_degree } => assert_eq!(min_degree, 1),
        }
    }
}
