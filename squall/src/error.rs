//! Error types for the squall library.
//!
//! All fallible operations in the library return [`Result`], whose error
//! type is the single [`Error`] enum defined here.

use thiserror::Error;

/// Result type alias for operations that may fail with a squall error.
///
/// # Examples
///
/// ```
/// use squall::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the squall library.
#[derive(Debug, Error)]
pub enum Error {
    /// A structural line could not be parsed.
    ///
    /// The tokenizer is permissive by design; this only occurs for the
    /// few malformations that cannot be passed through safely, such as
    /// a `Host` line with no patterns.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// The 1-based line number of the offending line.
        line: usize,
        /// A description of what was malformed.
        message: String,
    },

    /// An operation referenced a host pattern absent from the document.
    #[error("host \"{pattern}\" not found")]
    HostNotFound {
        /// The pattern that was looked up.
        pattern: String,
    },

    /// An add or clone target pattern already exists in the document.
    #[error("host \"{pattern}\" already exists")]
    DuplicateHost {
        /// The pattern that collided.
        pattern: String,
    },

    /// A move target position is out of range.
    #[error("invalid position {position}: document has {count} host block(s)")]
    InvalidPosition {
        /// The requested position.
        position: usize,
        /// The number of host blocks in the document.
        count: usize,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred while constructing a document record.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl From<crate::document::ValidationError> for Error {
    fn from(err: crate::document::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error indicates a missing host pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use squall::Error;
    ///
    /// let err = Error::HostNotFound { pattern: "web".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HostNotFound { .. })
    }

    /// Check if the error indicates a duplicate host pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use squall::Error;
    ///
    /// let err = Error::DuplicateHost { pattern: "web".into() };
    /// assert!(err.is_duplicate());
    /// ```
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateHost { .. })
    }
}
