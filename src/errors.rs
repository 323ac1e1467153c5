//! Provides the error type used by all visit methods and, through them,
//! by the traversal engine.

use thiserror::Error;

/// The error type returned by visitors and propagated unchanged by the traversal.
///
/// Traversal is fail-fast: the first error returned from a visit call unwinds the whole
/// walk and the partial result is discarded. Leaves and mismatched child counts are *not*
/// errors.
#[derive(Error, Debug)]
pub enum TraversalError {
    /// A visitor decided to stop the traversal.
    #[error("Traversal aborted: {reason}")]
    Aborted { reason: String },
    /// Any error raised inside a visit body.
    #[error("Visitor failed: {0}")]
    Visitor(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl TraversalError {
    /// Shortcut for [TraversalError::Aborted]
    pub fn aborted(reason: impl Into<String>) -> Self {
        TraversalError::Aborted { reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let error = TraversalError::aborted("too deep");
        assert_eq!(error.to_string(), "Traversal aborted: too deep");

        let foreign: Box<dyn std::error::Error + Send + Sync> = "bad label".into();
        let error: TraversalError = foreign.into();
        assert!(matches!(error, TraversalError::Visitor(_)));
        assert_eq!(error.to_string(), "Visitor failed: bad label");
    }
}
