//! HTTP request handlers - thin layer that delegates to the domain service

use super::{dto::*, error::{map_domain_error, Problem}};
use crate::contract::{ConfigurationError, ConfigurationField, Secret};
use crate::domain::{ConnectivityCheck, Service};
use axum::{
    extract::{Path, Query},
    Json,
};
use std::sync::Arc;

/// Current configuration
pub async fn get_configuration(service: Arc<Service>) -> Json<ConfigurationDto> {
    Json(service.snapshot().into())
}

/// Apply a submitted configuration form
pub async fn update_configuration(
    service: Arc<Service>,
    Json(req): Json<UpdateConfigurationRequest>,
) -> Result<Json<ConfigurationDto>, Problem> {
    service
        .apply(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(service.snapshot().into()))
}

/// Run the validator of one field against a proposed value
pub async fn check_field(
    service: Arc<Service>,
    Path(field): Path<String>,
    Query(query): Query<CheckFieldQuery>,
) -> Result<Json<FormValidationDto>, Problem> {
    let field: ConfigurationField = field.parse().map_err(map_domain_error)?;

    Ok(Json(service.validate_field(field, &query.value).into()))
}

/// Check that the endpoint is reachable with the given credentials
pub async fn test_connection(
    service: Arc<Service>,
    checker: Arc<dyn ConnectivityCheck>,
    Json(req): Json<TestConnectionRequest>,
) -> Result<Json<FormValidationDto>, Problem> {
    let url = req
        .url
        .or_else(|| service.url())
        .ok_or_else(|| missing("url"))?;
    let user_name = req
        .user_name
        .or_else(|| service.user_name())
        .ok_or_else(|| missing("user_name"))?;
    let password = req
        .password
        .map(Secret::from)
        .or_else(|| service.password())
        .ok_or_else(|| missing("password"))?;

    let verdict = checker
        .check(&url, &user_name, &password)
        .await
        .map_err(|e| map_domain_error(ConfigurationError::from(e)))?;

    Ok(Json(verdict.into()))
}

fn missing(field: &str) -> Problem {
    map_domain_error(ConfigurationError::Validation {
        message: format!("{} is required and no value is stored", field),
    })
}
