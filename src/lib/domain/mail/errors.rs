//! Mail errors

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// The shape a field was expected to have
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    /// The field must be provided
    Present,

    /// A string
    String,

    /// A string, or an object with a string `email` field
    StringOrAddress,

    /// An object
    Object,

    /// An array
    Array,

    /// An array whose elements are all objects
    ArrayOfObjects,

    /// An object whose values are all strings
    StringMap,

    /// A non-negative integer
    UnsignedInteger,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            Expected::Present => "a value",
            Expected::String => "string",
            Expected::StringOrAddress => "string or address object",
            Expected::Object => "object",
            Expected::Array => "array",
            Expected::ArrayOfObjects => "array of objects",
            Expected::StringMap => "object of strings",
            Expected::UnsignedInteger => "non-negative integer",
        };

        write!(f, "{}", shape)
    }
}

/// A field assignment failed validation
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{expected} expected for `{field}`")]
pub struct ValidationError {
    /// The offending field
    pub field: &'static str,

    /// The shape the field should have had
    pub expected: Expected,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: &'static str, expected: Expected) -> Self {
        Self { field, expected }
    }
}

/// Errors raised by a [`MailSender`](super::MailSender)
#[derive(Debug, Error)]
pub enum SendError {
    /// The payload could not be written
    #[error("could not write the mail payload")]
    WriteError(#[from] std::io::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for SendError {
    fn from(err: anyhow::Error) -> Self {
        SendError::UnknownError(err)
    }
}

impl From<serde_json::Error> for SendError {
    fn from(err: serde_json::Error) -> Self {
        SendError::UnknownError(err.into())
    }
}

/// Errors that can occur when building and sending mail
#[derive(Debug, Error)]
pub enum SendMailError {
    /// The mail data was invalid
    #[error(transparent)]
    Validation(ValidationError),

    /// The sender rejected the payload
    #[error("could not send mail: {0}")]
    Send(SendError),
}

impl From<ValidationError> for SendMailError {
    fn from(err: ValidationError) -> Self {
        debug!("ValidationError -> SendMailError");

        SendMailError::Validation(err)
    }
}

impl From<SendError> for SendMailError {
    fn from(err: SendError) -> Self {
        debug!("SendError -> SendMailError");

        SendMailError::Send(err)
    }
}
