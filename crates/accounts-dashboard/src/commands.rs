//! Dashboard commands
//!
//! Each user action on the dashboard maps to one function here. Commands
//! mutate `AppState` and hand back render-ready data; front ends only
//! draw what they receive.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use accounts_core::{
    filter_accounts, Account, Clipboard, Confirm, CopyField, CoreError, NewAccount, Platform,
};

use crate::config::DashboardConfig;
use crate::error::DashboardResult;
use crate::state::AppState;

/// JSON envelope for `--json` output: either `data` or an `error` message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> From<DashboardResult<T>> for CommandResult<T> {
    fn from(result: DashboardResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self {
                success: false,
                data: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Account listing entry (no password)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountInfo {
    pub id: String,
    pub platform: String,
    pub platform_name: Option<String>,
    pub title: String,
    pub email: Option<String>,
    pub username: Option<String>,
    pub has_password: bool,
    pub notes: Option<String>,
    pub created_at: String,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            platform: account.platform.slug().to_string(),
            platform_name: account.platform_name().map(str::to_string),
            title: account.display_name().to_string(),
            email: account.email.clone(),
            username: account.username.clone(),
            has_password: account.password.is_some(),
            notes: account.notes.clone(),
            created_at: account.created_at.to_rfc3339(),
        }
    }
}

/// One account as drawn on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountCard {
    pub id: Uuid,
    pub short_id: String,
    pub title: String,
    pub platform: String,
    pub email: Option<String>,
    pub username: Option<String>,
    /// Plaintext when visible, the configured mask otherwise
    pub password: Option<String>,
    pub password_visible: bool,
    pub notes: Option<String>,
    pub added_on: String,
}

impl AccountCard {
    pub fn project(account: &Account, visible: bool, config: &DashboardConfig) -> Self {
        let password = account.password.as_ref().map(|p| {
            if visible {
                p.clone()
            } else {
                config.password_mask.clone()
            }
        });

        Self {
            id: account.id,
            short_id: account.short_id(),
            title: account.display_name().to_string(),
            platform: account.platform.slug().to_string(),
            email: account.email.clone(),
            username: account.username.clone(),
            password,
            password_visible: visible,
            notes: account.notes.clone(),
            added_on: format_date(&account.created_at, &config.date_format),
        }
    }
}

/// Format a timestamp, falling back to ISO dates on a bad format string
fn format_date(timestamp: &DateTime<Utc>, format: &str) -> String {
    let valid = !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    if valid {
        timestamp.format(format).to_string()
    } else {
        warn!("Invalid date_format '{}', using %Y-%m-%d", format);
        timestamp.format("%Y-%m-%d").to_string()
    }
}

/// The projected dashboard for the current query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub query: String,
    pub cards: Vec<AccountCard>,
    /// Accounts in the store, regardless of the query
    pub total: usize,
}

impl DashboardView {
    /// True when nothing matches, which shows the empty-state message
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    NotFound,
}

// ============================================================================
// ADD ACCOUNT
// ============================================================================

/// Open the add-account modal
pub fn open_add_form(state: &mut AppState) {
    state.form_open = true;
}

/// Close the add-account modal, keeping whatever was typed
pub fn close_add_form(state: &mut AppState) {
    state.form_open = false;
}

/// Submit the add-account modal.
///
/// On success the account is stored at the top of the list, the form is
/// cleared and the modal closes. On a validation error nothing changes.
pub fn submit_add_form(state: &mut AppState) -> DashboardResult<AccountCard> {
    let record = state.form.submit()?;
    let card = add_account(state, record);

    state.form.reset();
    state.form_open = false;

    Ok(card)
}

/// Store a record directly, bypassing form validation
pub fn add_account(state: &mut AppState, record: NewAccount) -> AccountCard {
    let account = state.store.add(record);
    info!("Added account {} ({})", account.id, account.platform.slug());

    AccountCard::project(account, false, &state.config)
}

/// Load the demo accounts shown on a fresh dashboard
pub fn seed_demo_accounts(state: &mut AppState) {
    // Added oldest first so the facebook account ends up on top
    state.store.add(
        NewAccount::new(Platform::Google)
            .email("work@gmail.com")
            .password("supersecretpass"),
    );
    state.store.add(
        NewAccount::new(Platform::Facebook)
            .email("ahmed@example.com")
            .username("ahmed.ali")
            .password("password123"),
    );
    debug!("Seeded demo accounts");
}

// ============================================================================
// LIST AND SEARCH
// ============================================================================

/// All accounts, newest first
pub fn list_accounts(state: &AppState) -> Vec<AccountInfo> {
    state.store.list().iter().map(AccountInfo::from).collect()
}

/// Update the search box
pub fn set_query(state: &mut AppState, query: impl Into<String>) {
    state.query = query.into();
    debug!("Search query set ({} chars)", state.query.chars().count());
}

pub fn clear_query(state: &mut AppState) {
    state.query.clear();
}

/// Project the dashboard for the current query and remember row order
pub fn dashboard_view(state: &mut AppState) -> DashboardView {
    let cards: Vec<AccountCard> = filter_accounts(state.store.list(), &state.query)
        .into_iter()
        .map(|account| {
            AccountCard::project(
                account,
                state.visibility.is_visible(&account.id),
                &state.config,
            )
        })
        .collect();

    state.last_rows = cards.iter().map(|c| c.id).collect();

    DashboardView {
        query: state.query.clone(),
        cards,
        total: state.store.len(),
    }
}

/// Card for a single account
pub fn account_card(state: &AppState, id: &Uuid) -> DashboardResult<AccountCard> {
    let account = find(state, id)?;
    Ok(AccountCard::project(
        account,
        state.visibility.is_visible(id),
        &state.config,
    ))
}

/// Resolve a selector: a 1-based row of the last projection, or an id prefix
pub fn resolve_selector(state: &AppState, selector: &str) -> DashboardResult<Uuid> {
    let selector = selector.trim();

    if let Ok(row) = selector.parse::<usize>() {
        if row >= 1 && row <= state.last_rows.len() {
            return Ok(state.last_rows[row - 1]);
        }
    }

    Ok(state.store.find_by_prefix(selector)?.id)
}

// ============================================================================
// REVEAL, COPY, DELETE
// ============================================================================

/// Flip password visibility for an account; returns the new state
pub fn toggle_password(state: &mut AppState, id: &Uuid) -> DashboardResult<bool> {
    find(state, id)?;
    let visible = state.visibility.toggle(id);
    debug!("Password for {} now {}", id, if visible { "shown" } else { "hidden" });
    Ok(visible)
}

/// Copy the full plaintext of one field to the clipboard
pub fn copy_field(
    state: &AppState,
    id: &Uuid,
    field: CopyField,
    clipboard: &mut dyn Clipboard,
) -> DashboardResult<()> {
    let account = find(state, id)?;
    let value = account.field(field).ok_or_else(|| CoreError::FieldMissing {
        field: field.as_str(),
        account: account.display_name().to_string(),
    })?;

    if let Err(e) = clipboard.set_text(value) {
        warn!("Failed to copy {} for {}: {}", field, id, e);
        return Err(e.into());
    }

    info!("Copied {} for {}", field, id);
    Ok(())
}

/// Delete an account after asking for confirmation
pub fn delete_account(state: &mut AppState, id: &Uuid, confirm: &mut dyn Confirm) -> DeleteOutcome {
    let title = match state.store.get(id) {
        Some(account) => account.display_name().to_string(),
        None => return DeleteOutcome::NotFound,
    };

    if !confirm.confirm(&format!("Delete account '{}'?", title)) {
        debug!("Delete of {} cancelled", id);
        return DeleteOutcome::Cancelled;
    }

    state.store.remove(id);
    state.last_rows.retain(|row| row != id);
    info!("Deleted account {}", id);
    DeleteOutcome::Deleted
}

fn find<'a>(state: &'a AppState, id: &Uuid) -> DashboardResult<&'a Account> {
    state
        .store
        .get(id)
        .ok_or_else(|| CoreError::AccountNotFound(id.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DashboardError, FormError};
    use accounts_core::{AlwaysConfirm, ClipboardError, ClipboardResult, MemoryClipboard, NeverConfirm};

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> ClipboardResult<()> {
            Err(ClipboardError::Unavailable)
        }
    }

    fn demo_state() -> AppState {
        let mut state = AppState::default();
        seed_demo_accounts(&mut state);
        state
    }

    #[test]
    fn test_json_envelope() {
        let state = demo_state();

        let listing = serde_json::to_value(CommandResult::ok(list_accounts(&state))).unwrap();
        assert_eq!(listing["success"], true);
        assert_eq!(listing["data"].as_array().map(Vec::len), Some(2));
        assert_eq!(listing["data"][0]["platform"], "facebook");
        assert!(listing.get("error").is_none());

        let missing = account_card(&state, &Uuid::new_v4());
        let failure = serde_json::to_value(CommandResult::from(missing)).unwrap();
        assert_eq!(failure["success"], false);
        assert!(failure.get("data").is_none());
        assert!(failure["error"].as_str().unwrap().contains("not found"));
    }

    #[test]
    fn test_demo_accounts_order() {
        let state = demo_state();
        let listed = list_accounts(&state);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].platform, "facebook");
        assert_eq!(listed[0].username.as_deref(), Some("ahmed.ali"));
        assert_eq!(listed[1].platform, "google");
    }

    #[test]
    fn test_submit_add_form() {
        let mut state = demo_state();
        open_add_form(&mut state);
        state.form.platform = "other".to_string();
        state.form.platform_name = "TikTok".to_string();
        state.form.username = "@dancer".to_string();
        state.form.password = "tok-tok".to_string();

        let card = submit_add_form(&mut state).unwrap();
        assert_eq!(card.title, "TikTok");
        assert_eq!(card.platform, "other");
        assert!(!state.form_open);
        assert!(state.form.password.is_empty());
        assert_eq!(state.form.platform, "other");

        // Newest on top
        assert_eq!(state.store.list()[0].id, card.id);
        assert_eq!(state.store.len(), 3);
    }

    #[test]
    fn test_submit_invalid_form_keeps_modal_open() {
        let mut state = demo_state();
        open_add_form(&mut state);
        state.form.username = "no-password".to_string();

        let result = submit_add_form(&mut state);
        assert!(matches!(
            result,
            Err(DashboardError::Validation(FormError::Required("password")))
        ));
        assert!(state.form_open);
        assert_eq!(state.form.username, "no-password");
        assert_eq!(state.store.len(), 2);
    }

    #[test]
    fn test_dashboard_view_filters() {
        let mut state = demo_state();
        set_query(&mut state, "gmail");

        let view = dashboard_view(&mut state);
        assert_eq!(view.total, 2);
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].platform, "google");
        assert_eq!(state.last_rows, vec![view.cards[0].id]);

        set_query(&mut state, "no-such-account");
        assert!(dashboard_view(&mut state).is_empty());

        clear_query(&mut state);
        assert_eq!(dashboard_view(&mut state).cards.len(), 2);
    }

    #[test]
    fn test_cards_mask_until_toggled() {
        let mut state = demo_state();
        let id = state.store.list()[0].id;

        let card = account_card(&state, &id).unwrap();
        assert_eq!(card.password.as_deref(), Some("••••••••••••"));
        assert!(!card.password_visible);

        assert!(toggle_password(&mut state, &id).unwrap());
        let card = account_card(&state, &id).unwrap();
        assert_eq!(card.password.as_deref(), Some("password123"));

        assert!(!toggle_password(&mut state, &id).unwrap());
        let card = account_card(&state, &id).unwrap();
        assert_eq!(card.password.as_deref(), Some("••••••••••••"));
    }

    #[test]
    fn test_card_without_password() {
        let mut state = AppState::default();
        let card = add_account(&mut state, NewAccount::new(Platform::Vk).username("durov"));
        assert!(card.password.is_none());
        assert_eq!(card.title, "VK");
    }

    #[test]
    fn test_date_format() {
        let timestamp = DateTime::parse_from_rfc3339("2026-10-18T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&timestamp, "%Y-%m-%d"), "2026-10-18");
        assert_eq!(format_date(&timestamp, "%d/%m/%Y"), "18/10/2026");
        assert_eq!(format_date(&timestamp, "%Q"), "2026-10-18");
    }

    #[test]
    fn test_toggle_unknown_account() {
        let mut state = demo_state();
        assert!(matches!(
            toggle_password(&mut state, &Uuid::new_v4()),
            Err(DashboardError::Core(CoreError::AccountNotFound(_)))
        ));
    }

    #[test]
    fn test_copy_field() {
        let state = demo_state();
        let google = state.store.list()[1].id;
        let mut clipboard = MemoryClipboard::new();

        copy_field(&state, &google, CopyField::Password, &mut clipboard).unwrap();
        assert_eq!(clipboard.contents(), Some("supersecretpass"));

        copy_field(&state, &google, CopyField::Email, &mut clipboard).unwrap();
        assert_eq!(clipboard.contents(), Some("work@gmail.com"));

        let missing = copy_field(&state, &google, CopyField::Username, &mut clipboard);
        assert!(matches!(
            missing,
            Err(DashboardError::Core(CoreError::FieldMissing { field: "username", .. }))
        ));
        assert_eq!(clipboard.contents(), Some("work@gmail.com"));
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let state = demo_state();
        let id = state.store.list()[0].id;

        let result = copy_field(&state, &id, CopyField::Email, &mut BrokenClipboard);
        assert!(matches!(result, Err(DashboardError::Clipboard(_))));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = demo_state();
        let id = state.store.list()[0].id;

        assert_eq!(
            delete_account(&mut state, &id, &mut NeverConfirm),
            DeleteOutcome::Cancelled
        );
        assert_eq!(state.store.len(), 2);

        let mut prompts = Vec::new();
        let mut recorder = |prompt: &str| {
            prompts.push(prompt.to_string());
            true
        };
        assert_eq!(
            delete_account(&mut state, &id, &mut recorder),
            DeleteOutcome::Deleted
        );
        assert_eq!(prompts, vec!["Delete account 'Facebook'?"]);
        assert!(!state.store.contains(&id));

        assert_eq!(
            delete_account(&mut state, &id, &mut AlwaysConfirm),
            DeleteOutcome::NotFound
        );
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn test_orphaned_visibility_is_harmless() {
        let mut state = demo_state();
        let id = state.store.list()[0].id;
        toggle_password(&mut state, &id).unwrap();

        delete_account(&mut state, &id, &mut AlwaysConfirm);
        let view = dashboard_view(&mut state);
        assert_eq!(view.cards.len(), 1);
        assert!(!view.cards[0].password_visible);
    }

    #[test]
    fn test_resolve_selector() {
        let mut state = demo_state();
        let view = dashboard_view(&mut state);

        assert_eq!(resolve_selector(&state, "1").unwrap(), view.cards[0].id);
        assert_eq!(resolve_selector(&state, "2").unwrap(), view.cards[1].id);

        let prefix = view.cards[1].short_id.clone();
        assert_eq!(resolve_selector(&state, &prefix).unwrap(), view.cards[1].id);

        assert!(resolve_selector(&state, "zz").is_err());
    }
}
