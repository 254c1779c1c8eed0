//! Global error handling for deguid
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for deguid operations
#[derive(Error, Debug)]
pub enum DeguidError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Root path missing or not a directory
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Identifier pattern errors
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Specialized Result type for deguid operations
pub type Result<T> = std::result::Result<T, DeguidError>;

/// Creates a DeguidError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DeguidError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            DeguidError::Unexpected(format!("{}: {}", context, e))
        })
    }
}
