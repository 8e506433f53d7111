//! Simulated login, logout and navigation
//!
//! There is no authentication: login waits a fixed delay and always
//! lands on the dashboard, logout is a plain redirect.

use std::time::Duration;
use tracing::info;

use crate::error::{DashboardResult, FormError};
use crate::form::is_valid_email;
use crate::routes::{Resolution, Route};
use crate::state::AppState;

/// Login form contents
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are required and the email must look like an address
    pub fn validate(&self) -> Result<(), FormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Required("email"));
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        if self.password.is_empty() {
            return Err(FormError::Required("password"));
        }
        Ok(())
    }
}

/// Validate the form, wait the configured delay, then route to the dashboard
pub async fn login(state: &mut AppState, form: &LoginForm) -> DashboardResult<Route> {
    form.validate()?;

    tokio::time::sleep(Duration::from_millis(state.config.login_delay_ms)).await;

    state.route = Route::Dashboard;
    info!("Signed in, showing dashboard");
    Ok(state.route)
}

/// Return to the login view. Accounts stay in memory for the session.
pub fn logout(state: &mut AppState) -> Route {
    state.route = Route::Login;
    state.form_open = false;
    state.visibility.hide_all();
    info!("Signed out");
    state.route
}

/// Switch views by path; unknown paths land on the dashboard
pub fn navigate(state: &mut AppState, path: &str) -> Resolution {
    let resolution = Route::resolve(path);
    if resolution.redirected {
        info!("Unknown path '{}', redirecting to {}", path, resolution.route);
    }
    state.route = resolution.route;
    resolution
}
