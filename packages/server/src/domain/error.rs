//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// StoredFileName validation error
    #[error("StoredFileName cannot be empty")]
    FileNameEmpty,

    /// StoredFileName is not a single path component
    #[error("StoredFileName must be a plain basename (got: {0:?})")]
    FileNameNotBasename(String),
}

/// Errors related to ChatMessage construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Neither text nor attachment was supplied
    #[error("a message needs text or an attachment")]
    Empty,
}
