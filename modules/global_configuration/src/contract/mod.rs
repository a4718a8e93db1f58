//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;
pub mod secret;

pub use client::GlobalConfigurationApi;
pub use error::ConfigurationError;
pub use model::{Configuration, ConfigurationField, ConfigurationUpdate, FormValidation};
pub use secret::Secret;
