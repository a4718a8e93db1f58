//! Connectivity check port
//!
//! The HTTP implementation lives in infra/http.

use crate::contract::{ConfigurationError, FormValidation, Secret};
use async_trait::async_trait;

/// Failures that prevent the check from producing a verdict
#[derive(Debug, thiserror::Error)]
pub enum ConnectivityError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("credentials could not be encoded as a header: {source}")]
    InvalidHeader {
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<ConnectivityError> for ConfigurationError {
    fn from(error: ConnectivityError) -> Self {
        let mut message = error.to_string();
        let mut source = std::error::Error::source(&error);
        // First level is already part of the Display text
        source = source.and_then(|s| s.source());
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        ConfigurationError::Connectivity { message }
    }
}

/// One authenticated reachability check against an endpoint
#[async_trait]
pub trait ConnectivityCheck: Send + Sync {
    /// `Ok(FormValidation::Ok)` on a success status, `Ok(FormValidation::Error)`
    /// carrying the status code otherwise. Transport failures are `Err` and
    /// must not be retried.
    async fn check(
        &self,
        url: &str,
        user_name: &str,
        password: &Secret,
    ) -> Result<FormValidation, ConnectivityError>;
}
