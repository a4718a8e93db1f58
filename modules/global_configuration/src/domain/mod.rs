//! Domain layer - business logic and services

pub mod connectivity;
pub mod repository;
pub mod service;
pub mod validation;

pub use connectivity::{ConnectivityCheck, ConnectivityError};
pub use repository::ConfigurationRepository;
pub use service::Service;
pub use validation::ValidatorRegistry;
