//! Module declaration and lifecycle
//!
//! The host creates one `GlobalConfigurationModule`, calls `init` once at
//! startup and then shares the resulting service by handle.

use crate::config::{Config, StorageConfig};
use crate::contract::GlobalConfigurationApi;
use crate::domain::{ConfigurationRepository, ConnectivityCheck, Service};
use crate::infra::http::HttpConnectivityChecker;
use crate::infra::storage::{FileConfigurationRepository, SeaOrmConfigurationRepository};
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Global configuration module
pub struct GlobalConfigurationModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
    checker: Arc<dyn ConnectivityCheck>,
}

impl Default for GlobalConfigurationModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
            checker: Arc::new(HttpConnectivityChecker::new()),
        }
    }
}

impl GlobalConfigurationModule {
    /// Build the repository named by `cfg` and load the stored record
    pub async fn init(&self, cfg: Config) -> Result<()> {
        let repo = build_repository(&cfg).await?;
        *self.config.write() = cfg;
        self.init_with_repository(repo).await
    }

    /// Load the stored record from an already built repository
    pub async fn init_with_repository(&self, repo: Arc<dyn ConfigurationRepository>) -> Result<()> {
        let service = Arc::new(Service::load(repo).await?);
        *self.service.write() = Some(service);

        tracing::info!("Global configuration module initialized");
        Ok(())
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    pub fn checker(&self) -> Arc<dyn ConnectivityCheck> {
        self.checker.clone()
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn GlobalConfigurationApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?, self.checker());
        Ok(Arc::new(client))
    }

    /// Mount the REST routes onto `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering global configuration REST routes");
        crate::api::rest::routes::register_routes(router, service, self.checker())
    }
}

async fn build_repository(cfg: &Config) -> Result<Arc<dyn ConfigurationRepository>> {
    match &cfg.storage {
        StorageConfig::File { path } => {
            tracing::info!(path = %path.display(), "Using file storage for global configuration");
            Ok(Arc::new(FileConfigurationRepository::new(path.clone())))
        }
        StorageConfig::Database { dsn } => {
            use crate::infra::storage::migrations::Migrator;
            use sea_orm_migration::MigratorTrait;

            let db = sea_orm::Database::connect(dsn.as_str()).await?;
            Migrator::up(&db, None).await?;
            tracing::info!("Global configuration migrations completed");

            Ok(Arc::new(SeaOrmConfigurationRepository::new(
                Arc::new(db),
                cfg.configuration_id.clone(),
            )))
        }
    }
}
