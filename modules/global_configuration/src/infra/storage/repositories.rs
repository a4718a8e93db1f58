//! Repository implementations

use crate::contract::Configuration;
use crate::domain::repository::ConfigurationRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::path::PathBuf;
use std::sync::Arc;

use super::entity;
use super::mapper::{to_active_model, StoredConfiguration};

// ===== File Repository =====

/// Keeps the record as a single JSON document on disk
pub struct FileConfigurationRepository {
    path: PathBuf,
}

impl FileConfigurationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ConfigurationRepository for FileConfigurationRepository {
    async fn load(&self) -> Result<Option<Configuration>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        let stored: StoredConfiguration = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(stored.into()))
    }

    async fn save(&self, configuration: &Configuration) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let body = serde_json::to_vec_pretty(&StoredConfiguration::from(configuration))?;

        // Write-then-rename so readers never see a half-written document
        let temp = self.temp_path();
        tokio::fs::write(&temp, body)
            .await
            .with_context(|| format!("writing {}", temp.display()))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .with_context(|| format!("replacing {}", self.path.display()))?;

        Ok(())
    }
}

// ===== SeaORM Repository =====

/// Keeps the record as one row of the `global_configuration` table
pub struct SeaOrmConfigurationRepository {
    db: Arc<DatabaseConnection>,
    configuration_id: String,
}

impl SeaOrmConfigurationRepository {
    pub fn new(db: Arc<DatabaseConnection>, configuration_id: impl Into<String>) -> Self {
        Self {
            db,
            configuration_id: configuration_id.into(),
        }
    }
}

#[async_trait]
impl ConfigurationRepository for SeaOrmConfigurationRepository {
    async fn load(&self) -> Result<Option<Configuration>> {
        let result = entity::Entity::find_by_id(self.configuration_id.clone())
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn save(&self, configuration: &Configuration) -> Result<()> {
        let existing = entity::Entity::find_by_id(self.configuration_id.clone())
            .one(&*self.db)
            .await?;

        let active = to_active_model(&self.configuration_id, configuration);
        if existing.is_some() {
            entity::Entity::update(active).exec(&*self.db).await?;
        } else {
            entity::Entity::insert(active)
                .exec_without_returning(&*self.db)
                .await?;
        }

        Ok(())
    }
}
