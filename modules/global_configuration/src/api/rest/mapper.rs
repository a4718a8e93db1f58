//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::Configuration> for ConfigurationDto {
    fn from(configuration: contract::Configuration) -> Self {
        Self {
            has_password: configuration
                .password
                .as_ref()
                .is_some_and(|p| !p.is_empty()),
            label: configuration.label,
            description: configuration.description,
            url: configuration.url,
            user_name: configuration.user_name,
            optional_block: configuration.optional_block,
        }
    }
}

impl From<UpdateConfigurationRequest> for contract::ConfigurationUpdate {
    fn from(req: UpdateConfigurationRequest) -> Self {
        Self {
            label: req.label,
            description: req.description,
            url: req.url,
            user_name: req.user_name,
            password: req.password.map(contract::Secret::from),
            optional_block: req.optional_block,
        }
    }
}

impl From<contract::FormValidation> for FormValidationDto {
    fn from(verdict: contract::FormValidation) -> Self {
        Self {
            kind: verdict.kind().to_string(),
            message: verdict.message().map(str::to_string),
        }
    }
}
