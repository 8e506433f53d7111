//! Add-account form
//!
//! Holds raw field input the way the modal does and turns it into a
//! `NewAccount` on submit. This is the only place account fields are
//! validated; the store itself accepts anything.

use regex::Regex;
use std::sync::LazyLock;

use accounts_core::{NewAccount, Platform};

use crate::error::FormError;

/// Loose address check, equivalent to an `<input type="email">`
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").ok());

/// Check an email address the way the form does
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .map(|pattern| pattern.is_match(value.trim()))
        .unwrap_or(true)
}

/// Raw add-account form state
#[derive(Debug, Clone, PartialEq)]
pub struct AddAccountForm {
    /// Platform slug (`facebook`, …, `other`)
    pub platform: String,
    /// Custom name, only used when `platform` is `other`
    pub platform_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub notes: String,
}

impl Default for AddAccountForm {
    fn default() -> Self {
        Self {
            platform: "facebook".to_string(),
            platform_name: String::new(),
            email: String::new(),
            username: String::new(),
            password: String::new(),
            notes: String::new(),
        }
    }
}

impl AddAccountForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the custom platform name field is shown
    pub fn needs_platform_name(&self) -> bool {
        self.platform.trim().eq_ignore_ascii_case("other")
    }

    /// Validate the fields and build the record to store
    pub fn submit(&self) -> Result<NewAccount, FormError> {
        let platform = if self.needs_platform_name() {
            let name = self.platform_name.trim();
            if name.is_empty() {
                return Err(FormError::Required("platform name"));
            }
            Platform::Other {
                name: name.to_string(),
            }
        } else {
            self.platform
                .parse::<Platform>()
                .map_err(|_| FormError::UnknownPlatform(self.platform.clone()))?
        };

        if self.password.is_empty() {
            return Err(FormError::Required("password"));
        }

        let email = non_empty(&self.email);
        if let Some(ref address) = email {
            if !is_valid_email(address) {
                return Err(FormError::InvalidEmail(address.clone()));
            }
        }

        Ok(NewAccount {
            platform,
            email,
            username: non_empty(&self.username),
            password: Some(self.password.clone()),
            notes: non_empty(&self.notes),
        })
    }

    /// Clear entered values, keeping the platform selection
    pub fn reset(&mut self) {
        self.platform_name.clear();
        self.email.clear();
        self.username.clear();
        self.password.clear();
        self.notes.clear();
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AddAccountForm {
        AddAccountForm {
            platform: "google".to_string(),
            email: " work@gmail.com ".to_string(),
            password: "supersecretpass".to_string(),
            ..AddAccountForm::default()
        }
    }

    #[test]
    fn test_submit_normalizes_blank_fields() {
        let record = filled().submit().unwrap();
        assert_eq!(record.platform, Platform::Google);
        assert_eq!(record.email.as_deref(), Some("work@gmail.com"));
        assert!(record.username.is_none());
        assert!(record.notes.is_none());
        assert_eq!(record.password.as_deref(), Some("supersecretpass"));
    }

    #[test]
    fn test_password_required() {
        let form = AddAccountForm {
            password: String::new(),
            ..filled()
        };
        assert_eq!(form.submit(), Err(FormError::Required("password")));
    }

    #[test]
    fn test_password_kept_verbatim() {
        let form = AddAccountForm {
            password: "  spaced  ".to_string(),
            ..filled()
        };
        assert_eq!(form.submit().unwrap().password.as_deref(), Some("  spaced  "));
    }

    #[test]
    fn test_other_requires_name() {
        let mut form = AddAccountForm {
            platform: "other".to_string(),
            ..filled()
        };
        assert!(form.needs_platform_name());
        assert_eq!(form.submit(), Err(FormError::Required("platform name")));

        form.platform_name = "TikTok".to_string();
        let record = form.submit().unwrap();
        assert_eq!(record.platform.custom_name(), Some("TikTok"));
    }

    #[test]
    fn test_name_dropped_for_fixed_platform() {
        let form = AddAccountForm {
            platform_name: "leftover".to_string(),
            ..filled()
        };
        let record = form.submit().unwrap();
        assert_eq!(record.platform, Platform::Google);
        assert!(record.platform.custom_name().is_none());
    }

    #[test]
    fn test_invalid_email() {
        let form = AddAccountForm {
            email: "not an email".to_string(),
            ..filled()
        };
        assert!(matches!(form.submit(), Err(FormError::InvalidEmail(_))));

        assert!(is_valid_email("ahmed@example.com"));
        assert!(!is_valid_email("ahmed@"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_unknown_platform() {
        let form = AddAccountForm {
            platform: "myspace".to_string(),
            ..filled()
        };
        assert_eq!(
            form.submit(),
            Err(FormError::UnknownPlatform("myspace".to_string()))
        );
    }

    #[test]
    fn test_reset_keeps_platform() {
        let mut form = AddAccountForm {
            platform: "vk".to_string(),
            username: "durov".to_string(),
            ..filled()
        };
        form.reset();
        assert_eq!(form.platform, "vk");
        assert!(form.username.is_empty());
        assert!(form.password.is_empty());
        assert!(form.email.is_empty());
    }
}
