//! Contract models for the global configuration
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use super::error::ConfigurationError;
use super::secret::Secret;
use std::fmt;
use std::str::FromStr;

/// The global configuration record.
///
/// Superset of every field the configuration form has ever carried, so all
/// of them are optional and a freshly created record is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Free-form label, letters and spaces expected
    pub label: Option<String>,
    /// Human readable description
    pub description: Option<String>,
    /// Endpoint used by the connectivity check
    pub url: Option<String>,
    /// User name for the connectivity check, letters only expected
    pub user_name: Option<String>,
    /// Write-only password for the connectivity check
    pub password: Option<Secret>,
    /// Toggles the optional block of the form
    pub optional_block: bool,
}

/// Partial update submitted from a configuration form.
///
/// Absent fields are left untouched; every present field is applied through
/// its own setter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationUpdate {
    pub label: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<Secret>,
    pub optional_block: Option<bool>,
}

/// Names of the configuration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationField {
    Label,
    Description,
    Url,
    UserName,
    Password,
    OptionalBlock,
}

impl ConfigurationField {
    /// All fields in form order
    pub const ALL: [ConfigurationField; 6] = [
        Self::Label,
        Self::Description,
        Self::Url,
        Self::UserName,
        Self::Password,
        Self::OptionalBlock,
    ];

    /// Name of the field as it appears in the configuration form
    pub fn form_name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Description => "description",
            Self::Url => "url",
            Self::UserName => "userName",
            Self::Password => "password",
            Self::OptionalBlock => "optionalBlock",
        }
    }
}

impl fmt::Display for ConfigurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

impl FromStr for ConfigurationField {
    type Err = ConfigurationError;

    /// Accepts both the form name (`userName`) and the snake_case name (`user_name`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "label" => Ok(Self::Label),
            "description" => Ok(Self::Description),
            "url" => Ok(Self::Url),
            "userName" | "user_name" => Ok(Self::UserName),
            "password" => Ok(Self::Password),
            "optionalBlock" | "optional_block" => Ok(Self::OptionalBlock),
            other => Err(ConfigurationError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

/// Outcome of a field check or of a connectivity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValidation {
    /// Value accepted, optionally with an informational message
    Ok(Option<String>),
    /// Value accepted but likely wrong
    Warning(String),
    /// Value rejected
    Error(String),
}

impl FormValidation {
    pub fn ok() -> Self {
        Self::Ok(None)
    }

    pub fn ok_with(message: impl Into<String>) -> Self {
        Self::Ok(Some(message.into()))
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Lowercase name of the verdict
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ok(_) => "ok",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok(message) => message.as_deref(),
            Self::Warning(message) | Self::Error(message) => Some(message),
        }
    }
}
