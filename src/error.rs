//! Error types for URL assembly.

use std::fmt;

/// Errors that can occur when building a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The builder's settings cannot be rendered
    InvalidState {
        /// Why the settings were rejected
        reason: &'static str,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState { reason } => write!(f, "invalid builder state: {reason}"),
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = BuildError::InvalidState {
            reason: "scheme is not defined",
        };
        assert_eq!(
            err.to_string(),
            "invalid builder state: scheme is not defined"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(BuildError::InvalidState { reason: "x" });
        assert!(err.source().is_none());
    }
}
