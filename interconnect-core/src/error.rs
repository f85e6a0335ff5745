use std::fmt;

use interconnect_model::ResourceIdError;
use thiserror::Error;

/// Every way an engine operation can be rejected. Rejections leave the
/// resource space untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterconnectError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("failed precondition: {0}")]
    FailedPrecondition(String),

    #[error("unimplemented: {0}")]
    Unimplemented(String),
}

/// Transport-neutral status code of an [`InterconnectError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    FailedPrecondition,
    Unimplemented,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::FailedPrecondition => "FAILED_PRECONDITION",
            ErrorCode::Unimplemented => "UNIMPLEMENTED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InterconnectError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists(message.into())
    }

    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::FailedPrecondition(message.into())
    }

    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::Unimplemented(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            InterconnectError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            InterconnectError::NotFound(_) => ErrorCode::NotFound,
            InterconnectError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            InterconnectError::FailedPrecondition(_) => ErrorCode::FailedPrecondition,
            InterconnectError::Unimplemented(_) => ErrorCode::Unimplemented,
        }
    }

    /// Message without the code prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            InterconnectError::InvalidArgument(msg)
            | InterconnectError::NotFound(msg)
            | InterconnectError::AlreadyExists(msg)
            | InterconnectError::FailedPrecondition(msg)
            | InterconnectError::Unimplemented(msg) => msg,
        }
    }
}

impl From<ResourceIdError> for InterconnectError {
    fn from(err: ResourceIdError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InterconnectError>;
