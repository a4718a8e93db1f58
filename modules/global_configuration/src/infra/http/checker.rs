//! HTTP implementation of the connectivity check

use crate::contract::{FormValidation, Secret};
use crate::domain::connectivity::{ConnectivityCheck, ConnectivityError};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::redirect;
use url::Url;
use zeroize::Zeroizing;

/// Issues a single GET with a Basic `Authorization` header.
///
/// Redirects are not followed: a 3xx answer is reported as a failed check.
#[derive(Clone)]
pub struct HttpConnectivityChecker {
    client: reqwest::Client,
}

impl HttpConnectivityChecker {
    /// # Panics
    /// Panics if the HTTP client cannot be created (invalid TLS backend).
    pub fn new() -> Self {
        #[allow(clippy::expect_used)]
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpConnectivityChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// `Basic base64(user_name:password)`
pub(crate) fn basic_authorization(user_name: &str, password: &Secret) -> Zeroizing<String> {
    let credentials = Zeroizing::new(format!("{}:{}", user_name, password.expose()));
    let encoded = Zeroizing::new(general_purpose::STANDARD.encode(credentials.as_bytes()));
    Zeroizing::new(format!("Basic {}", &*encoded))
}

/// [`basic_authorization`] as a header value marked sensitive
pub(crate) fn authorization_header(
    user_name: &str,
    password: &Secret,
) -> Result<HeaderValue, ConnectivityError> {
    let raw = basic_authorization(user_name, password);
    let mut value = HeaderValue::from_str(&raw)
        .map_err(|source| ConnectivityError::InvalidHeader { source })?;
    value.set_sensitive(true);
    Ok(value)
}

#[async_trait]
impl ConnectivityCheck for HttpConnectivityChecker {
    async fn check(
        &self,
        url: &str,
        user_name: &str,
        password: &Secret,
    ) -> Result<FormValidation, ConnectivityError> {
        let target = Url::parse(url).map_err(|source| ConnectivityError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(target)
            .header(AUTHORIZATION, authorization_header(user_name, password)?)
            .send()
            .await
            .map_err(|source| ConnectivityError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        drop(response);

        if status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "Connectivity check succeeded");
            Ok(FormValidation::ok_with("Success"))
        } else {
            tracing::warn!(%url, status = status.as_u16(), "Connectivity check rejected");
            Ok(FormValidation::error(format!(
                "Connection failed: HTTP status {}",
                status.as_u16()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_authorization_header() {
        let header = basic_authorization("admin", &Secret::new("s3cret"));
        let expected = format!("Basic {}", general_purpose::STANDARD.encode("admin:s3cret"));
        assert_eq!(header.as_str(), expected);
        assert_eq!(header.as_str(), "Basic YWRtaW46czNjcmV0");
    }

    #[test]
    fn test_basic_authorization_with_empty_password() {
        let header = basic_authorization("admin", &Secret::new(""));
        assert_eq!(header.as_str(), "Basic YWRtaW46");
    }

    #[test]
    fn test_authorization_header_is_sensitive() {
        let header = authorization_header("admin", &Secret::new("s3cret")).unwrap();
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "Basic YWRtaW46czNjcmV0");
        assert!(!format!("{:?}", header).contains("YWRtaW46czNjcmV0"));
    }

    #[tokio::test]
    async fn test_malformed_url_is_fatal() {
        let checker = HttpConnectivityChecker::new();
        let err = checker
            .check("not a url", "admin", &Secret::new("pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConnectivityError::InvalidUrl { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
