//! Error handling for table typesetting
//!
//! This module provides a unified error type and result type for all
//! typesetting operations. Per-cell formatting failures are not errors:
//! they fall back to the value's plain text conversion. Output write
//! failures are reported by the sink and recovered, not raised.

use std::fmt;

/// Typesetting error type
#[derive(Debug, Clone)]
pub enum TypesetError {
    /// Style name not found in the registry
    UnknownStyle { name: String },
    /// Alignment token not recognized
    InvalidAlignment { token: String },
    /// LaTeX column format specification rejected
    InvalidColumnFormat { message: String },
    /// Row/header cell counts do not agree
    ShapeMismatch { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for TypesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypesetError::UnknownStyle { name } => {
                write!(f, "Unknown table style: {}", name)
            }
            TypesetError::InvalidAlignment { token } => {
                write!(f, "Invalid alignment token: {:?}", token)
            }
            TypesetError::InvalidColumnFormat { message } => {
                write!(f, "Invalid column format: {}", message)
            }
            TypesetError::ShapeMismatch { message } => {
                write!(f, "Shape mismatch: {}", message)
            }
            TypesetError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for TypesetError {}

impl From<std::io::Error> for TypesetError {
    fn from(err: std::io::Error) -> Self {
        TypesetError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for typesetting operations
pub type TypesetResult<T> = Result<T, TypesetError>;

// Convenience constructors for errors
impl TypesetError {
    pub fn unknown_style(name: impl Into<String>) -> Self {
        TypesetError::UnknownStyle { name: name.into() }
    }

    pub fn invalid_alignment(token: impl Into<String>) -> Self {
        TypesetError::InvalidAlignment {
            token: token.into(),
        }
    }

    pub fn invalid_column_format(message: impl Into<String>) -> Self {
        TypesetError::InvalidColumnFormat {
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        TypesetError::ShapeMismatch {
            message: message.into(),
        }
    }
}
