//! Data models for stored accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

/// Supported platforms; `Other` carries its own display name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Facebook,
    Twitter,
    Google,
    Vk,
    Instagram,
    Linkedin,
    Other {
        name: String,
    },
}

impl Platform {
    /// Platform slugs in the order the add form offers them
    pub const ALL_SLUGS: [&'static str; 7] = [
        "facebook",
        "twitter",
        "google",
        "vk",
        "instagram",
        "linkedin",
        "other",
    ];

    /// Lowercase tag, also the value matched by search
    pub fn slug(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Google => "google",
            Platform::Vk => "vk",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Other { .. } => "other",
        }
    }

    /// Human-readable platform label
    pub fn label(&self) -> &str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Twitter => "X (Twitter)",
            Platform::Google => "Google",
            Platform::Vk => "VK",
            Platform::Instagram => "Instagram",
            Platform::Linkedin => "LinkedIn",
            Platform::Other { .. } => "Other",
        }
    }

    /// Custom name, only present for `Other`
    pub fn custom_name(&self) -> Option<&str> {
        match self {
            Platform::Other { name } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Build a platform from a slug, attaching `name` when the slug is `other`
    pub fn from_slug(slug: &str, name: impl Into<String>) -> Result<Self, CoreError> {
        match slug.trim().to_lowercase().as_str() {
            "other" => Ok(Platform::Other { name: name.into() }),
            other => other.parse(),
        }
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    /// Parses the fixed platforms; `other` parses with an empty name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "twitter" | "x" => Ok(Platform::Twitter),
            "google" => Ok(Platform::Google),
            "vk" => Ok(Platform::Vk),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            "other" => Ok(Platform::Other {
                name: String::new(),
            }),
            _ => Err(CoreError::UnknownPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Account fields supplied by the add form (id and timestamp are generated)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewAccount {
    #[serde(flatten)]
    pub platform: Platform,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub notes: Option<String>,
}

impl NewAccount {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A stored account. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Unique identifier
    pub id: Uuid,

    /// Platform, including the custom name for `Other`
    #[serde(flatten)]
    pub platform: Platform,

    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub notes: Option<String>,

    /// When the account was added
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create an account from form data, stamping a fresh id and creation time
    pub fn new(record: NewAccount) -> Self {
        Self {
            id: Uuid::new_v4(),
            platform: record.platform,
            email: record.email,
            username: record.username,
            password: record.password,
            notes: record.notes,
            created_at: Utc::now(),
        }
    }

    /// Custom platform name, present only when the platform is `Other`
    pub fn platform_name(&self) -> Option<&str> {
        self.platform.custom_name()
    }

    /// Title shown on the account card
    pub fn display_name(&self) -> &str {
        match self.platform.custom_name() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.platform.label(),
        }
    }

    /// Value of a copyable field, if set
    pub fn field(&self, field: CopyField) -> Option<&str> {
        match field {
            CopyField::Email => self.email.as_deref(),
            CopyField::Username => self.username.as_deref(),
            CopyField::Password => self.password.as_deref(),
        }
    }

    /// First eight hex digits of the id
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Account fields that can be copied to the clipboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CopyField {
    Email,
    Username,
    Password,
}

impl CopyField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyField::Email => "email",
            CopyField::Username => "username",
            CopyField::Password => "password",
        }
    }
}

impl FromStr for CopyField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(CopyField::Email),
            "username" | "user" => Ok(CopyField::Username),
            "password" | "pass" => Ok(CopyField::Password),
            _ => Err(CoreError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for CopyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
