use thiserror::Error;

/// Custom error types for rangeview
#[derive(Debug, Error)]
pub enum RangeviewError {
    /// A component asked for the notifier outside a mounted notification center.
    #[error("notifier requested outside of a mounted NotificationCenter")]
    NotifierUnavailable,

    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
