//! SeaORM entity for the configuration table

use sea_orm::entity::prelude::*;

/// One row per configuration id
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "global_configuration")]
pub struct Model {
    /// Configuration id (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub label: Option<String>,

    pub description: Option<String>,

    pub url: Option<String>,

    pub user_name: Option<String>,

    /// Stored as supplied; never returned outside the crate
    pub password: Option<String>,

    pub optional_block: bool,

    /// Last save timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
