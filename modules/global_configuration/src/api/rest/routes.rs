//! Route registration

use super::{dto::*, handlers};
use crate::domain::{ConnectivityCheck, Service};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Register all REST routes
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    checker: Arc<dyn ConnectivityCheck>,
) -> anyhow::Result<Router> {
    let router = router
        .route(
            "/global-configuration",
            get(get_configuration_handler).put(update_configuration_handler),
        )
        .route("/global-configuration/check/{field}", get(check_field_handler))
        .route(
            "/global-configuration/test-connection",
            post(test_connection_handler),
        )
        .layer(Extension(service))
        .layer(Extension(checker));

    Ok(router)
}

// ===== Handler wrappers that extract state from Extension =====

async fn get_configuration_handler(
    Extension(service): Extension<Arc<Service>>,
) -> axum::Json<ConfigurationDto> {
    handlers::get_configuration(service).await
}

async fn update_configuration_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<UpdateConfigurationRequest>,
) -> Result<axum::Json<ConfigurationDto>, super::error::Problem> {
    handlers::update_configuration(service, json).await
}

async fn check_field_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<String>,
    query: axum::extract::Query<CheckFieldQuery>,
) -> Result<axum::Json<FormValidationDto>, super::error::Problem> {
    handlers::check_field(service, path, query).await
}

async fn test_connection_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(checker): Extension<Arc<dyn ConnectivityCheck>>,
    json: axum::Json<TestConnectionRequest>,
) -> Result<axum::Json<FormValidationDto>, super::error::Problem> {
    handlers::test_connection(service, checker, json).await
}
