//! Repository trait for persisting the configuration record
//!
//! Implementations are in infra/storage.

use crate::contract::Configuration;
use anyhow::Result;
use async_trait::async_trait;

/// Load/save pair for the whole configuration record
#[async_trait]
pub trait ConfigurationRepository: Send + Sync {
    /// Load the stored record, `None` if nothing has been saved yet
    async fn load(&self) -> Result<Option<Configuration>>;

    /// Replace the stored record with `configuration`
    async fn save(&self, configuration: &Configuration) -> Result<()>;
}
