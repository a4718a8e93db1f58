//! Storage mappers
//!
//! Conversions between the contract model, the SeaORM entity and the JSON
//! document written by the file repository.

use super::entity;
use crate::contract::{Configuration, Secret};
use serde::{Deserialize, Serialize};

// ===== SeaORM conversions =====

impl From<entity::Model> for Configuration {
    fn from(entity: entity::Model) -> Self {
        Self {
            label: entity.label,
            description: entity.description,
            url: entity.url,
            user_name: entity.user_name,
            password: entity.password.map(Secret::from),
            optional_block: entity.optional_block,
        }
    }
}

/// Build a full active model for `id` from the record
pub fn to_active_model(id: &str, model: &Configuration) -> entity::ActiveModel {
    use sea_orm::ActiveValue::*;

    entity::ActiveModel {
        id: Set(id.to_string()),
        label: Set(model.label.clone()),
        description: Set(model.description.clone()),
        url: Set(model.url.clone()),
        user_name: Set(model.user_name.clone()),
        password: Set(model.password.as_ref().map(|p| p.expose().to_string())),
        optional_block: Set(model.optional_block),
        updated_at: Set(chrono::Utc::now()),
    }
}

// ===== JSON document =====

/// On-disk JSON representation of the record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub optional_block: bool,
}

impl From<StoredConfiguration> for Configuration {
    fn from(stored: StoredConfiguration) -> Self {
        Self {
            label: stored.label,
            description: stored.description,
            url: stored.url,
            user_name: stored.user_name,
            password: stored.password.map(Secret::from),
            optional_block: stored.optional_block,
        }
    }
}

impl From<&Configuration> for StoredConfiguration {
    fn from(model: &Configuration) -> Self {
        Self {
            label: model.label.clone(),
            description: model.description.clone(),
            url: model.url.clone(),
            user_name: model.user_name.clone(),
            password: model.password.as_ref().map(|p| p.expose().to_string()),
            optional_block: model.optional_block,
        }
    }
}
