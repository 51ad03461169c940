//! Error type for the SMS implementation crate

use sms_core::{ErrorCategory, SmsError};

/// Errors raised by readers, writers, the reorderer and the tools
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Format, range or configuration fault detected while processing data
    #[error(transparent)]
    Sms(#[from] SmsError),

    /// Failure of the underlying stream
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration bundle could not be decoded
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Conflicting or unusable options
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl Error {
    /// Attach a description of the failed operation to an I/O error
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Sms(err) => err.category(),
            Error::Io { .. } => ErrorCategory::Io,
            Error::Config(_) | Error::InvalidOption(_) => ErrorCategory::Configuration,
        }
    }
}

/// Result type for SMS operations
pub type Result<T> = std::result::Result<T, Error>;
