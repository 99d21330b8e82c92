//! Error handling for CourseBuddy
//! 
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for CourseBuddy application
#[derive(Error, Debug)]
pub enum CourseBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),
    
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for CourseBuddy operations
pub type Result<T> = std::result::Result<T, CourseBuddyError>;

impl CourseBuddyError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CourseBuddyError::Config(_) => ErrorSeverity::Critical,
            CourseBuddyError::ConfigSource(_) => ErrorSeverity::Critical,
            CourseBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            CourseBuddyError::Telegram(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
