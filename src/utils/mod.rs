//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - The output sink (file and console)

pub mod error;
pub mod output;

// Re-export commonly used items
pub use error::{TypesetError, TypesetResult};
pub use output::{write_lines, OutputOptions};
