//! Accounts Dashboard - Session state and UI commands
//!
//! Provides:
//! - Routing between the login view and the dashboard
//! - Simulated login / logout
//! - The add-account form and its validation
//! - Commands for adding, searching, revealing, copying and deleting accounts
//! - Render-ready account cards
//! - TOML configuration

pub mod config;
pub mod error;
pub mod form;
pub mod routes;
pub mod session;
pub mod state;
pub mod commands;

pub use config::*;
pub use error::*;
pub use form::*;
pub use routes::*;
pub use session::*;
pub use state::*;
pub use commands::*;
