//! Global Configuration Module
//!
//! Persisted global settings (label, description, endpoint URL, credentials
//! and an optional-block flag), per-field form validation, and a
//! connectivity check against the configured endpoint using HTTP Basic
//! authentication.

// Public exports
pub mod contract;
pub use contract::{
    client::GlobalConfigurationApi, error::ConfigurationError, Configuration, ConfigurationField,
    ConfigurationUpdate, FormValidation, Secret,
};

pub mod module;
pub use module::GlobalConfigurationModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
