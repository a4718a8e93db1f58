//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current configuration. The password is never returned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConfigurationDto {
    #[schema(example = "Ops Team")]
    pub label: Option<String>,

    pub description: Option<String>,

    #[schema(example = "https://ci.example.com/api/json")]
    pub url: Option<String>,

    #[schema(example = "admin")]
    pub user_name: Option<String>,

    /// Whether a password is stored
    pub has_password: bool,

    pub optional_block: bool,
}

/// Configuration form submission; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateConfigurationRequest {
    pub label: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub optional_block: Option<bool>,
}

/// Value to check against a field validator
#[derive(Debug, Clone, Deserialize)]
pub struct CheckFieldQuery {
    #[serde(default)]
    pub value: String,
}

/// Connection test parameters; absent values fall back to the stored ones
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TestConnectionRequest {
    pub url: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
}

/// Verdict of a field check or connection test
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormValidationDto {
    /// `ok`, `warning` or `error`
    #[schema(example = "warning")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Please specify a label.")]
    pub message: Option<String>,
}

// Note: Conversion implementations live in mapper.rs
