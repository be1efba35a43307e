//! Error types for stream construction and argument validation.
//!
//! Failures raised by caller-supplied capabilities are never converted into
//! these types. They are returned unchanged by the `try_*` operations.

/// Describes an argument rejected before any element was processed.
///
/// # Examples
///
/// ```rust
/// use minifunk::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "Stream::limit",
///     parameter: "max_size",
///     reason: "must not be negative",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Stream::limit: max_size must not be negative"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The operation that rejected the argument.
    pub operation: &'static str,
    /// The name of the rejected parameter.
    pub parameter: &'static str,
    /// Why the argument was rejected.
    pub reason: &'static str,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: {} {}",
            self.operation, self.parameter, self.reason
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Errors raised by the stream itself.
///
/// # Examples
///
/// ```rust
/// use minifunk::{Stream, StreamError};
///
/// let stream = Stream::from(vec![1, 2, 3]);
/// let error = stream.limit(-1).unwrap_err();
/// assert!(matches!(error, StreamError::InvalidArgument(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A required argument was absent or out of range.
    InvalidArgument(InvalidArgumentError),
}

impl StreamError {
    pub(crate) fn invalid_argument(
        operation: &'static str,
        parameter: &'static str,
        reason: &'static str,
    ) -> Self {
        tracing::debug!(operation, parameter, reason, "rejected argument");
        Self::InvalidArgument(InvalidArgumentError {
            operation,
            parameter,
            reason,
        })
    }
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for StreamError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

/// Unwraps a capability that was resolved at runtime.
///
/// Closures passed directly to stream operations can never be absent. When a
/// capability comes from a lookup that may fail (a registry, a config-driven
/// choice), this rejects `None` before any element is touched.
///
/// # Errors
///
/// Returns [`StreamError::InvalidArgument`] when `capability` is `None`.
///
/// # Examples
///
/// ```rust
/// use minifunk::{Stream, require};
///
/// let stream = Stream::from(vec![1, 2, 3]);
/// let predicate: Option<fn(&i32) -> bool> = None;
///
/// let result = require(predicate, "Stream::filter", "predicate")
///     .map(|predicate| stream.filter(predicate));
/// assert!(result.is_err());
/// ```
pub fn require<C>(
    capability: Option<C>,
    operation: &'static str,
    parameter: &'static str,
) -> Result<C, StreamError> {
    capability
        .ok_or_else(|| StreamError::invalid_argument(operation, parameter, "must not be null"))
}
