//! Session state for the dashboard
//!
//! Everything here lives for one session only. The store and the
//! visibility map are owned side by side and are not kept in sync:
//! a removed account leaves a harmless visibility entry behind.

use uuid::Uuid;

use accounts_core::{AccountStore, VisibilityMap};

use crate::config::DashboardConfig;
use crate::form::AddAccountForm;
use crate::routes::Route;

/// Dashboard session state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Accounts added this session
    pub store: AccountStore,
    /// Per-account password visibility
    pub visibility: VisibilityMap,
    /// Current search box contents
    pub query: String,
    /// Current view
    pub route: Route,
    /// Add-account modal contents
    pub form: AddAccountForm,
    /// Whether the add-account modal is open
    pub form_open: bool,
    /// Configuration
    pub config: DashboardConfig,
    /// Row ids of the most recent dashboard projection, in display order
    pub last_rows: Vec<Uuid>,
}

impl AppState {
    /// Create a new session starting at the login view
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            store: AccountStore::new(),
            visibility: VisibilityMap::new(),
            query: String::new(),
            route: Route::Login,
            form: AddAccountForm::new(),
            form_open: false,
            config,
            last_rows: Vec::new(),
        }
    }

    pub fn is_on_dashboard(&self) -> bool {
        self.route == Route::Dashboard
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
