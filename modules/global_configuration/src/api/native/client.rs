//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{
    Configuration, ConfigurationError, ConfigurationField, FormValidation,
    GlobalConfigurationApi, Secret,
};
use crate::domain::{ConnectivityCheck, Service};
use async_trait::async_trait;
use std::sync::Arc;

/// Native client that calls the domain service and the checker directly
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
    checker: Arc<dyn ConnectivityCheck>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>, checker: Arc<dyn ConnectivityCheck>) -> Self {
        Self { service, checker }
    }
}

#[async_trait]
impl GlobalConfigurationApi for NativeClient {
    async fn get_configuration(&self) -> Result<Configuration, ConfigurationError> {
        Ok(self.service.snapshot())
    }

    async fn set_label(&self, label: Option<String>) -> Result<(), ConfigurationError> {
        self.service.set_label(label).await
    }

    async fn set_description(&self, description: Option<String>) -> Result<(), ConfigurationError> {
        self.service.set_description(description).await
    }

    async fn set_url(&self, url: Option<String>) -> Result<(), ConfigurationError> {
        self.service.set_url(url).await
    }

    async fn set_user_name(&self, user_name: Option<String>) -> Result<(), ConfigurationError> {
        self.service.set_user_name(user_name).await
    }

    async fn set_password(&self, password: Option<Secret>) -> Result<(), ConfigurationError> {
        self.service.set_password(password).await
    }

    async fn set_optional_block(&self, optional_block: bool) -> Result<(), ConfigurationError> {
        self.service.set_optional_block(optional_block).await
    }

    async fn validate_field(
        &self,
        field: ConfigurationField,
        value: &str,
    ) -> Result<FormValidation, ConfigurationError> {
        Ok(self.service.validate_field(field, value))
    }

    async fn test_connection(
        &self,
        url: &str,
        user_name: &str,
        password: &Secret,
    ) -> Result<FormValidation, ConfigurationError> {
        self.checker
            .check(url, user_name, password)
            .await
            .map_err(ConfigurationError::from)
    }
}
