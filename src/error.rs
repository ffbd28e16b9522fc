//! Error types for the Cellpad command shell

use cellpad_core::CellpadError;
use cellpad_engine::engine::AddressError;
use thiserror::Error;

/// Errors raised while executing a shell command
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CellpadError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub type Result<T> = std::result::Result<T, ShellError>;
