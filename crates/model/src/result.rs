use crate::{Error, Record};
use std::fmt::{Debug, Formatter};

/// Outcome of scanning a table.
/// Failures are values so a response can always be built from them.
#[derive(Debug)]
pub enum ScanResult {
    Success(Vec<Record>),
    Failure(ErrorInfo),
}

impl ScanResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ScanResult::Success(_))
    }
}

pub struct ErrorInfo {
    // Short text which is safe to return to the caller
    pub message: String,
    // Underlying error, only used for diagnostics
    pub cause: Error,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>, cause: impl Into<Error>) -> Self {
        ErrorInfo {
            message: message.into(),
            cause: cause.into(),
        }
    }
}

impl Debug for ErrorInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorInfo")
            .field("message", &self.message)
            .field("cause", &self.cause.to_string())
            .finish()
    }
}
