//! Common test utilities: an in-memory repository that counts saves

#![allow(dead_code)]

use async_trait::async_trait;
use global_configuration::contract::Configuration;
use global_configuration::domain::repository::ConfigurationRepository;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MockConfigurationRepo {
    stored: Arc<RwLock<Option<Configuration>>>,
    saves: Arc<RwLock<Vec<Configuration>>>,
    loads: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
}

impl MockConfigurationRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already holds `configuration`
    pub fn with_stored(configuration: Configuration) -> Self {
        let repo = Self::new();
        *repo.stored.write() = Some(configuration);
        repo
    }

    pub fn save_count(&self) -> usize {
        self.saves.read().len()
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Every record passed to `save`, in call order
    pub fn saved(&self) -> Vec<Configuration> {
        self.saves.read().clone()
    }

    pub fn stored(&self) -> Option<Configuration> {
        self.stored.read().clone()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ConfigurationRepository for MockConfigurationRepo {
    async fn load(&self) -> anyhow::Result<Option<Configuration>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.stored.read().clone())
    }

    async fn save(&self, configuration: &Configuration) -> anyhow::Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        self.saves.write().push(configuration.clone());
        *self.stored.write() = Some(configuration.clone());
        Ok(())
    }
}
