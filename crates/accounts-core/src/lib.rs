//! Accounts Core - Session-scoped credential records
//!
//! This crate provides:
//! - The account model with a tagged platform type
//! - An in-memory, newest-first account store
//! - View projection: query filtering and per-account password visibility
//! - Clipboard and confirmation seams for front ends

pub mod models;
pub mod store;
pub mod view;
pub mod clipboard;
pub mod confirm;
pub mod error;

pub use models::*;
pub use store::*;
pub use view::*;
pub use clipboard::*;
pub use confirm::*;
pub use error::*;
