//! Failures that can surface from pulling a cursor.
//!
//! Exhaustion is never an error; it is [`Step::Complete`](crate::Step::Complete).
//! Everything here is a failure raised by caller code (a transform, a producer
//! body) or a misuse of the producer runtime.

use thiserror::Error;

/// Boxed error raised by caller-supplied code.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A `try_*` transform or predicate failed on an element.
    #[error("transform failed: {0}")]
    Transform(#[source] BoxError),

    /// A producer body returned an error.
    #[error("producer failed: {0}")]
    Producer(#[source] BoxError),

    /// A producer body awaited something other than an emission, which the
    /// runtime cannot resume.
    #[error("producer suspended without emitting a value")]
    Stalled,
}

impl Error {
    pub fn transform(err: impl Into<BoxError>) -> Self {
        Error::Transform(err.into())
    }

    pub fn producer(err: impl Into<BoxError>) -> Self {
        Error::Producer(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_cause() {
        let err = Error::transform("bad element 4");
        assert_eq!(err.to_string(), "transform failed: bad element 4");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_stalled_has_no_source() {
        assert!(Error::Stalled.source().is_none());
    }
}
