//! Per-field validation of proposed configuration values
//!
//! Validators are pure: they look only at the proposed value, never at the
//! stored record, and never fail.

use crate::contract::{ConfigurationField, FormValidation};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

// Constant patterns, covered by the tests below
#[allow(clippy::expect_used)]
static LETTERS_AND_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z ]+$").expect("valid label pattern"));

#[allow(clippy::expect_used)]
static LETTERS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid user name pattern"));

/// Signature shared by every field validator
pub type Validator = fn(&str) -> FormValidation;

/// Label must be present and made of letters and spaces
pub fn validate_label(value: &str) -> FormValidation {
    if value.is_empty() {
        return FormValidation::warning("Please specify a label.");
    }
    if !LETTERS_AND_SPACES.is_match(value) {
        return FormValidation::warning("Name can only contain letters and spaces.");
    }
    FormValidation::ok()
}

/// Description must be present
pub fn validate_description(value: &str) -> FormValidation {
    if value.is_empty() {
        return FormValidation::warning("Please specify a description.");
    }
    FormValidation::ok()
}

/// User name must be present and made of letters only
pub fn validate_user_name(value: &str) -> FormValidation {
    if value.is_empty() {
        return FormValidation::warning("Please specify username");
    }
    if !LETTERS_ONLY.is_match(value) {
        return FormValidation::warning("UserName can only contain letters.");
    }
    FormValidation::ok()
}

/// Explicit field → validator table
#[derive(Clone)]
pub struct ValidatorRegistry {
    validators: HashMap<ConfigurationField, Validator>,
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.validators.keys()).finish()
    }
}

impl ValidatorRegistry {
    /// Registry with no validators
    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Registry with the validators of the configuration form
    pub fn standard() -> Self {
        Self::empty()
            .with(ConfigurationField::Label, validate_label)
            .with(ConfigurationField::Description, validate_description)
            .with(ConfigurationField::UserName, validate_user_name)
    }

    /// Register (or replace) the validator for `field`
    pub fn with(mut self, field: ConfigurationField, validator: Validator) -> Self {
        self.validators.insert(field, validator);
        self
    }

    pub fn has_validator(&self, field: ConfigurationField) -> bool {
        self.validators.contains_key(&field)
    }

    /// Run the validator of `field`, `None` when the field has none
    pub fn validate(&self, field: ConfigurationField, value: &str) -> Option<FormValidation> {
        self.validators.get(&field).map(|validator| validator(value))
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
