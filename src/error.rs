//! Error types for hrefkit.

use thiserror::Error;

/// Result type for hrefkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while resolving tokens or building links.
#[derive(Error, Debug)]
pub enum Error {
    /// A URL or link was built from a builder that has no URL pattern.
    #[error("URL pattern is required to build a URL")]
    MissingUrlPattern,

    /// A resource property was set twice.
    #[error("Duplicate property: {0}")]
    DuplicateProperty(String),

    /// A token binder could not extract a value from an object.
    #[error("Token extraction failed: {0}")]
    Extraction(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a binder failure, either a message or an underlying error.
    pub fn extraction(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Extraction(cause.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_extraction_keeps_source() {
        let cause = "x".parse::<u32>().unwrap_err();
        let err = Error::extraction(cause.clone());
        assert_eq!(
            err.to_string(),
            format!("Token extraction failed: {}", cause)
        );
        let source = err.source().expect("extraction error has a source");
        assert_eq!(source.to_string(), cause.to_string());
        assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
    }

    #[test]
    fn test_extraction_from_message() {
        let err = Error::extraction("no id");
        assert_eq!(err.to_string(), "Token extraction failed: no id");
    }
}
