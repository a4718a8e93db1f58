//! Domain service - the settings store
//!
//! Holds the configuration record in memory, hands out per-field getters and
//! setters, and persists the whole record on every mutation.

use super::repository::ConfigurationRepository;
use super::validation::ValidatorRegistry;
use crate::contract::{
    Configuration, ConfigurationError, ConfigurationField, ConfigurationUpdate, FormValidation,
    Secret,
};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Domain service for the global configuration
pub struct Service {
    repo: Arc<dyn ConfigurationRepository>,
    validators: ValidatorRegistry,
    state: RwLock<Configuration>,
    /// Held across mutate + save so saves land in mutation order
    write_lock: Mutex<()>,
}

impl Service {
    /// Create the service, loading any previously saved record
    pub async fn load(repo: Arc<dyn ConfigurationRepository>) -> Result<Self, ConfigurationError> {
        let stored = repo.load().await.map_err(persistence_error)?;
        match &stored {
            Some(_) => tracing::info!("Loaded stored global configuration"),
            None => tracing::info!("No stored global configuration, using defaults"),
        }

        Ok(Self {
            repo,
            validators: ValidatorRegistry::standard(),
            state: RwLock::new(stored.unwrap_or_default()),
            write_lock: Mutex::new(()),
        })
    }

    // ===== Getters =====

    /// Copy of the whole record
    pub fn snapshot(&self) -> Configuration {
        self.state.read().clone()
    }

    pub fn label(&self) -> Option<String> {
        self.state.read().label.clone()
    }

    pub fn description(&self) -> Option<String> {
        self.state.read().description.clone()
    }

    pub fn url(&self) -> Option<String> {
        self.state.read().url.clone()
    }

    pub fn user_name(&self) -> Option<String> {
        self.state.read().user_name.clone()
    }

    pub fn password(&self) -> Option<Secret> {
        self.state.read().password.clone()
    }

    pub fn optional_block(&self) -> bool {
        self.state.read().optional_block
    }

    // ===== Setters =====

    pub async fn set_label(&self, label: Option<String>) -> Result<(), ConfigurationError> {
        self.mutate(ConfigurationField::Label, |c| c.label = label)
            .await
    }

    pub async fn set_description(
        &self,
        description: Option<String>,
    ) -> Result<(), ConfigurationError> {
        self.mutate(ConfigurationField::Description, |c| {
            c.description = description
        })
        .await
    }

    pub async fn set_url(&self, url: Option<String>) -> Result<(), ConfigurationError> {
        self.mutate(ConfigurationField::Url, |c| c.url = url).await
    }

    pub async fn set_user_name(&self, user_name: Option<String>) -> Result<(), ConfigurationError> {
        self.mutate(ConfigurationField::UserName, |c| c.user_name = user_name)
            .await
    }

    pub async fn set_password(&self, password: Option<Secret>) -> Result<(), ConfigurationError> {
        self.mutate(ConfigurationField::Password, |c| c.password = password)
            .await
    }

    pub async fn set_optional_block(&self, optional_block: bool) -> Result<(), ConfigurationError> {
        self.mutate(ConfigurationField::OptionalBlock, |c| {
            c.optional_block = optional_block
        })
        .await
    }

    /// Apply a submitted form field by field, in form order.
    ///
    /// Each present field goes through its setter and is persisted on its
    /// own. Stops at the first persistence failure; fields applied before it
    /// stay applied.
    pub async fn apply(&self, update: ConfigurationUpdate) -> Result<(), ConfigurationError> {
        let ConfigurationUpdate {
            label,
            description,
            url,
            user_name,
            password,
            optional_block,
        } = update;

        if let Some(label) = label {
            self.set_label(Some(label)).await?;
        }
        if let Some(description) = description {
            self.set_description(Some(description)).await?;
        }
        if let Some(url) = url {
            self.set_url(Some(url)).await?;
        }
        if let Some(user_name) = user_name {
            self.set_user_name(Some(user_name)).await?;
        }
        if let Some(password) = password {
            self.set_password(Some(password)).await?;
        }
        if let Some(optional_block) = optional_block {
            self.set_optional_block(optional_block).await?;
        }
        Ok(())
    }

    // ===== Validation =====

    /// Validate a proposed value. Fields without a validator are ok.
    pub fn validate_field(&self, field: ConfigurationField, value: &str) -> FormValidation {
        self.validators
            .validate(field, value)
            .unwrap_or_else(FormValidation::ok)
    }

    // ===== Internals =====

    /// Assign unconditionally, then persist the whole record.
    ///
    /// The assignment stays in place when the save fails.
    async fn mutate<F>(&self, field: ConfigurationField, apply: F) -> Result<(), ConfigurationError>
    where
        F: FnOnce(&mut Configuration),
    {
        let _guard = self.write_lock.lock().await;

        let snapshot = {
            let mut state = self.state.write();
            apply(&mut *state);
            state.clone()
        };

        self.repo
            .save(&snapshot)
            .await
            .map_err(persistence_error)?;

        tracing::debug!(field = %field, "Persisted global configuration");
        Ok(())
    }
}

fn persistence_error(error: anyhow::Error) -> ConfigurationError {
    ConfigurationError::Persistence {
        message: format!("{:#}", error),
    }
}
