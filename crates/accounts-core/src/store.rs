//! In-memory account store
//!
//! Holds the session's accounts newest-first. Nothing here is persisted:
//! the collection lives exactly as long as the store value.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::models::{Account, NewAccount};

/// Ordered collection of accounts, most recently added first
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing accounts, keeping the given order
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Add a record at the front of the collection. Always succeeds.
    pub fn add(&mut self, record: NewAccount) -> &Account {
        self.accounts.insert(0, Account::new(record));
        &self.accounts[0]
    }

    /// Remove the account with `id`. Returns false (and changes nothing) if absent.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|a| &a.id != id);
        self.accounts.len() != before
    }

    /// All accounts, newest first
    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: &Uuid) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.id == id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.accounts.iter().any(|a| &a.id == id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Resolve a unique id prefix (hyphens optional, case-insensitive)
    pub fn find_by_prefix(&self, prefix: &str) -> CoreResult<&Account> {
        let needle: String = prefix
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_lowercase();

        if needle.is_empty() {
            return Err(CoreError::AccountNotFound(prefix.to_string()));
        }

        let mut matches = self
            .accounts
            .iter()
            .filter(|a| a.id.simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(account), None) => Ok(account),
            (Some(_), Some(_)) => Err(CoreError::AmbiguousPrefix(prefix.to_string())),
            (None, _) => Err(CoreError::AccountNotFound(prefix.to_string())),
        }
    }
}
