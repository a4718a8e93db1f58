//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to read and change the
//! global configuration. NO HTTP - direct function calls.

use super::{
    error::ConfigurationError,
    model::{Configuration, ConfigurationField, FormValidation},
    secret::Secret,
};
use async_trait::async_trait;

/// Global configuration API for inter-module communication
#[async_trait]
pub trait GlobalConfigurationApi: Send + Sync {
    // ===== Accessors =====

    /// Current record. The password stays wrapped.
    async fn get_configuration(&self) -> Result<Configuration, ConfigurationError>;

    /// Every setter persists the whole record before returning.
    async fn set_label(&self, label: Option<String>) -> Result<(), ConfigurationError>;

    async fn set_description(&self, description: Option<String>) -> Result<(), ConfigurationError>;

    async fn set_url(&self, url: Option<String>) -> Result<(), ConfigurationError>;

    async fn set_user_name(&self, user_name: Option<String>) -> Result<(), ConfigurationError>;

    async fn set_password(&self, password: Option<Secret>) -> Result<(), ConfigurationError>;

    async fn set_optional_block(&self, optional_block: bool) -> Result<(), ConfigurationError>;

    // ===== Checks =====

    /// Validate a proposed value for a field. Fields without a validator are ok.
    async fn validate_field(
        &self,
        field: ConfigurationField,
        value: &str,
    ) -> Result<FormValidation, ConfigurationError>;

    /// One authenticated GET against `url`.
    ///
    /// A non-success status is an `Error` verdict; a transport failure is
    /// returned as `ConfigurationError::Connectivity`.
    async fn test_connection(
        &self,
        url: &str,
        user_name: &str,
        password: &Secret,
    ) -> Result<FormValidation, ConfigurationError>;
}
