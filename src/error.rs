//! Error handling for html-match
//!
//! Every fallible operation in this crate returns [`Result<T, Error>`](Result).
//! The variants map onto the ways a matching run can fail:
//!
//! - [`Error::ReadError`] - an input document could not be opened or read
//! - [`Error::NotFound`] - the reference element id does not resolve
//! - [`Error::NoCandidates`] - the candidate selector matched nothing
//! - [`Error::SelectorError`] - the candidate selector is not valid CSS
//! - [`Error::JsonError`] - the report could not be serialized
//! - [`Error::IoError`] - writing the report failed
//!
//! A run where candidates exist but none shares a value with the reference
//! is *not* an error; [`select_best_match`](crate::matcher::select_best_match)
//! reports it as `Ok(None)`.
//!
//! # Usage
//!
//! ```rust
//! use html_match::{extract_reference, Error, HtmlDocument};
//!
//! let doc = HtmlDocument::parse("<div id=\"other\"></div>");
//! match extract_reference(&doc, "missing") {
//!     Err(Error::NotFound(id)) => assert_eq!(id, "missing"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::borrow::Cow;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for all html-match operations
#[derive(Error, Debug)]
pub enum Error {
    /// An input document could not be read
    ///
    /// Raised for missing files and permission problems. Invalid UTF-8 is not
    /// an error; those bytes are replaced when decoding. The offending path is
    /// kept for the diagnostic.
    #[error("Failed to read '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No element in the original document carries the requested id
    #[error("Reference element not found: no element with id '{0}'")]
    NotFound(Cow<'static, str>),

    /// The candidate selector matched zero elements in the modified document
    #[error("No candidates: selector '{0}' matched no elements")]
    NoCandidates(Cow<'static, str>),

    /// CSS selector parsing errors
    #[error("Selector error: {0}")]
    SelectorError(Cow<'static, str>),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Output errors
    ///
    /// Automatically converted from `std::io::Error` when writing the report fails.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Create a read error for the given path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a not-found error with an owned id
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound(Cow::Owned(id.into()))
    }

    /// Create a no-candidates error with an owned selector
    pub fn no_candidates(selector: impl Into<String>) -> Self {
        Error::NoCandidates(Cow::Owned(selector.into()))
    }

    /// Create a selector error with a static string
    ///
    /// Use this for compile-time known error messages to avoid allocations.
    pub fn selector_static(msg: &'static str) -> Self {
        Error::SelectorError(Cow::Borrowed(msg))
    }

    /// Create a selector error with an owned string
    ///
    /// Use this for dynamic error messages that include runtime context.
    pub fn selector_owned(msg: String) -> Self {
        Error::SelectorError(Cow::Owned(msg))
    }
}

/// Result type alias for html-match operations
pub type Result<T> = std::result::Result<T, Error>;
