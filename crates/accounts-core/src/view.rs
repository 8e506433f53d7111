//! Derived views over the account store
//!
//! - Query filtering: case-insensitive substring match over platform,
//!   username, email and custom platform name
//! - Password visibility: per-account flag, hidden unless toggled

use std::collections::HashMap;
use uuid::Uuid;

use crate::models::Account;

/// Check whether an account matches a search query.
///
/// An empty query matches everything. Absent fields never match.
pub fn matches(account: &Account, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    };

    contains(Some(account.platform.slug()))
        || contains(account.username.as_deref())
        || contains(account.email.as_deref())
        || contains(account.platform_name())
}

/// Filter accounts by query, preserving the source order
pub fn filter_accounts<'a>(accounts: &'a [Account], query: &str) -> Vec<&'a Account> {
    accounts.iter().filter(|a| matches(a, query)).collect()
}

/// Per-account password visibility. Unknown ids are hidden.
#[derive(Debug, Clone, Default)]
pub struct VisibilityMap {
    visible: HashMap<Uuid, bool>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, id: &Uuid) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    /// Flip the flag for `id` and return the new value
    pub fn toggle(&mut self, id: &Uuid) -> bool {
        let flag = self.visible.entry(*id).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Mask every password again
    pub fn hide_all(&mut self) {
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewAccount, Platform};
    use crate::store::AccountStore;

    fn demo_store() -> AccountStore {
        let mut store = AccountStore::new();
        store.add(NewAccount::new(Platform::Google).email("work@gmail.com"));
        store.add(NewAccount::new(Platform::Facebook).username("ahmed.ali"));
        store
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let store = demo_store();
        let result = filter_accounts(store.list(), "");

        let ids: Vec<Uuid> = result.iter().map(|a| a.id).collect();
        let all: Vec<Uuid> = store.list().iter().map(|a| a.id).collect();
        assert_eq!(ids, all);
    }

    #[test]
    fn test_query_by_email() {
        let store = demo_store();
        let result = filter_accounts(store.list(), "gmail");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].platform, Platform::Google);
        assert_eq!(result[0].email.as_deref(), Some("work@gmail.com"));
    }

    #[test]
    fn test_no_match() {
        let store = demo_store();
        assert!(filter_accounts(store.list(), "nothing-like-this").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let store = demo_store();
        for query in ["AHMED", "Ahmed.Ali", "FaceBook", "GMAIL.COM"] {
            assert_eq!(filter_accounts(store.list(), query).len(), 1, "query {query}");
        }
    }

    #[test]
    fn test_custom_platform_name() {
        let mut store = demo_store();
        store.add(NewAccount::new(Platform::Other {
            name: "TikTok".to_string(),
        }));

        let result = filter_accounts(store.list(), "tik");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].platform_name(), Some("TikTok"));

        // The slug itself is searchable too
        assert_eq!(filter_accounts(store.list(), "other").len(), 1);
    }

    #[test]
    fn test_notes_and_password_not_searched() {
        let mut store = AccountStore::new();
        store.add(
            NewAccount::new(Platform::Vk)
                .password("hunter2")
                .notes("recovery codes in drawer"),
        );
        assert!(filter_accounts(store.list(), "hunter").is_empty());
        assert!(filter_accounts(store.list(), "drawer").is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut store = AccountStore::new();
        store.add(NewAccount::new(Platform::Google).email("a@gmail.com"));
        store.add(NewAccount::new(Platform::Twitter).username("skip"));
        store.add(NewAccount::new(Platform::Google).email("b@gmail.com"));

        let emails: Vec<_> = filter_accounts(store.list(), "google")
            .iter()
            .map(|a| a.email.as_deref().unwrap())
            .collect();
        assert_eq!(emails, vec!["b@gmail.com", "a@gmail.com"]);
    }

    #[test]
    fn test_visibility_defaults_hidden() {
        let map = VisibilityMap::new();
        assert!(!map.is_visible(&Uuid::new_v4()));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut map = VisibilityMap::new();
        let id = Uuid::new_v4();

        assert!(map.toggle(&id));
        assert!(map.is_visible(&id));
        assert!(!map.toggle(&id));
        assert!(!map.is_visible(&id));
    }

    #[test]
    fn test_hide_all() {
        let mut map = VisibilityMap::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        map.toggle(&a);
        map.toggle(&b);

        map.hide_all();
        assert!(!map.is_visible(&a));
        assert!(!map.is_visible(&b));
    }
}
