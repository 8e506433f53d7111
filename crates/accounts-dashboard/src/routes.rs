//! Addressable views

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Unauthenticated entry view
    Login,
    /// Account dashboard
    Dashboard,
}

/// Outcome of resolving a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub route: Route,
    /// True when the path was unrecognised and redirected to the dashboard
    pub redirected: bool,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
        }
    }

    /// Map a path to a view. Unknown paths redirect to the dashboard.
    pub fn resolve(path: &str) -> Resolution {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match normalized {
            "/login" => Resolution {
                route: Route::Login,
                redirected: false,
            },
            "/" => Resolution {
                route: Route::Dashboard,
                redirected: false,
            },
            _ => Resolution {
                route: Route::Dashboard,
                redirected: true,
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
