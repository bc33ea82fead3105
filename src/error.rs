//! Error types for historystack

use std::io;
use thiserror::Error;

/// Result type alias for historystack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for historystack
///
/// The history store itself never fails; these errors come from the
/// surrounding pieces that parse input (status names, configuration files).
#[derive(Error, Debug)]
pub enum Error {
    /// A status name could not be recognised.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file error or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
