//! Storage layer - JSON file and database repositories

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

pub use repositories::{FileConfigurationRepository, SeaOrmConfigurationRepository};
