//! Error types for account operations

use thiserror::Error;

/// Errors that can occur when looking up or reading accounts
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account id prefix '{0}' matches more than one account")]
    AmbiguousPrefix(String),

    #[error("Account {account} has no {field}")]
    FieldMissing {
        field: &'static str,
        account: String,
    },

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Unknown field '{0}' (expected email, username or password)")]
    UnknownField(String),
}

/// Errors during clipboard writes
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard backend available (install wl-copy, xclip or xsel)")]
    Unavailable,

    #[error("Clipboard command failed: {0}")]
    CommandFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
pub type ClipboardResult<T> = Result<T, ClipboardError>;
