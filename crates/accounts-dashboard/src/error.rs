//! Error types for dashboard commands

use accounts_core::{ClipboardError, CoreError};
use thiserror::Error;

/// Field-level validation failures at the form boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Unknown platform '{0}'")]
    UnknownPlatform(String),
}

/// Errors surfaced by dashboard commands
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Clipboard: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Invalid input: {0}")]
    Validation(#[from] FormError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
