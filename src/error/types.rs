//! Error types
//!
//! Defines the two error channels used when handling account configuration:
//! fail-fast `AccountError` failures and collected `ValidationError` diagnostics.

use std::fmt;
use std::io;

/// Fail-fast errors raised while parsing account descriptions or building accounts
#[derive(Debug)]
pub enum AccountError {
    /// A description string violated the `[LEVEL:]USERNAME:PASSWORDFILE` format
    /// or used a disallowed value
    InvalidDescriptor(String),
    /// A password file could not be read
    PasswordFileRead(String, io::Error),
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::InvalidDescriptor(msg) => write!(f, "{}", msg),
            AccountError::PasswordFileRead(path, e) => {
                write!(f, "Failed to read password file {}: {}", path, e)
            }
        }
    }
}

impl std::error::Error for AccountError {}

/// One diagnostic collected while validating an authorizations list
///
/// Messages carry the configuration key as a literal `'{{key}}'` placeholder;
/// the consumer substitutes the user-facing key name before display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
