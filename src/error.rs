//! Error types for the highlighting pipeline.
//!
//! The public [`highlight`](crate::highlight) entry point never returns an
//! error: internal failures drive its degraded-output fallback chain instead.
//! The fallible stage functions ([`classify_tokens`](crate::classify_tokens),
//! [`restore_comments`](crate::restore_comments)) surface these errors to
//! callers composing the stages directly.
//!
//! ## Error Categories
//!
//! - **Classification**: the token scan could not produce output
//! - **Restoration**: a placeholder's index has no matching stored comment
//!
//! ## Examples
//!
//! ```rust
//! use json_highlight::{restore_comments, CommentStore, Error, HighlightOptions};
//!
//! // A placeholder pointing past the end of an empty store cannot resolve.
//! let store = CommentStore::new();
//! let options = HighlightOptions::new();
//! let result = restore_comments("__COMMENT_PLACEHOLDER_7__", &store, &options);
//! assert!(matches!(result, Err(Error::Restoration { index: 7, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the highlighting stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The token classification scan failed to produce output.
    ///
    /// This is the single generic processing failure of the classifier; it
    /// never reports per-category errors.
    #[error("token classification failed: {0}")]
    Classification(String),

    /// A comment placeholder referenced an index outside the comment store.
    #[error("placeholder index {index} out of range: store holds {available} comments")]
    Restoration { index: usize, available: usize },

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a classification error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_highlight::Error;
    ///
    /// let err = Error::classification("no alternative captured");
    /// assert!(err.to_string().contains("classification"));
    /// ```
    pub fn classification<T: fmt::Display>(msg: T) -> Self {
        Error::Classification(msg.to_string())
    }

    /// Creates a restoration error for a placeholder index with no stored comment.
    pub fn restoration(index: usize, available: usize) -> Self {
        Error::Restoration { index, available }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
