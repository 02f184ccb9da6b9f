//! JSON-over-HTTP auth client.
//!
//! Endpoints (relative to `base_url`, paths configurable):
//!
//! ```text
//! POST /auth/login     Credentials   → AuthResponse
//! POST /auth/register  Registration  → AuthResponse
//! GET  /auth/me        (Bearer)      → CurrentUserResponse
//! ```
//!
//! Any non-2xx status becomes [`AuthError::Rejected`], carrying the
//! backend's `message`/`error` field when the body has one.

use std::time::Duration;

use hearth_protocol::{
    AuthResponse, Codec, Credentials, CurrentUserResponse, ErrorBody,
    JsonCodec, Registration,
};
use hearth_session::{AuthClient, AuthError};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::TransportError;

const JSON: &str = "application/json";

// ---------------------------------------------------------------------------
// HttpClientConfig
// ---------------------------------------------------------------------------

/// Where and how to reach the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Base URL, e.g. `https://api.example.com/v1`. A trailing slash is
    /// ignored.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    pub login_path: String,
    pub register_path: String,
    pub current_user_path: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api".to_owned(),
            timeout_secs: 15,
            login_path: "/auth/login".to_owned(),
            register_path: "/auth/register".to_owned(),
            current_user_path: "/auth/me".to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// HttpAuthClient
// ---------------------------------------------------------------------------

/// An [`AuthClient`] that talks to a JSON HTTP backend.
///
/// `reqwest::Client` pools connections internally, so one instance
/// should live for the whole application.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    config: HttpClientConfig,
    codec: JsonCodec,
}

impl HttpAuthClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    /// - [`TransportError::InvalidBaseUrl`] if `base_url` isn't http(s)
    /// - [`TransportError::ClientBuild`] if reqwest can't initialize
    pub fn new(config: HttpClientConfig) -> Result<Self, TransportError> {
        let base = config.base_url.trim_end_matches('/').to_owned();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(TransportError::InvalidBaseUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TransportError::ClientBuild)?;

        let config = HttpClientConfig {
            base_url: base,
            ..config
        };

        Ok(Self {
            http,
            config,
            codec: JsonCodec,
        })
    }

    /// The configuration in use (with the base URL normalized).
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Joins the base URL and an endpoint path with exactly one `/`.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// POSTs a JSON body and decodes a JSON reply.
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        let bytes = self.codec.encode(body)?;
        let request = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(bytes);
        self.execute(path, request).await
    }

    /// Sends the request and maps status/body onto `AuthError`.
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AuthError> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(path, error = %e, "auth request failed to send");
            AuthError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        tracing::debug!(path, status = status.as_u16(), "auth response received");

        if !status.is_success() {
            let message = self
                .codec
                .decode::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message);
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(self.codec.decode(&body)?)
    }
}

impl AuthClient for HttpAuthClient {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthResponse, AuthError> {
        let resp: AuthResponse =
            self.post(&self.config.login_path, credentials).await?;
        Ok(resp.validate()?)
    }

    async fn register(
        &self,
        registration: &Registration,
    ) -> Result<AuthResponse, AuthError> {
        let resp: AuthResponse =
            self.post(&self.config.register_path, registration).await?;
        Ok(resp.validate()?)
    }

    async fn current_user(
        &self,
        token: &str,
    ) -> Result<CurrentUserResponse, AuthError> {
        let path = &self.config.current_user_path;
        let request = self
            .http
            .get(self.url(path))
            .header(ACCEPT, JSON)
            .bearer_auth(token);
        self.execute(path, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_http_base_url() {
        let config = HttpClientConfig {
            base_url: "ftp://example.com".into(),
            ..HttpClientConfig::default()
        };

        let result = HttpAuthClient::new(config);

        assert!(matches!(result, Err(TransportError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = HttpClientConfig {
            base_url: "https://api.example.com/v1/".into(),
            ..HttpClientConfig::default()
        };

        let client = HttpAuthClient::new(config).unwrap();

        assert_eq!(client.config().base_url, "https://api.example.com/v1");
        assert_eq!(
            client.url("/auth/me"),
            "https://api.example.com/v1/auth/me"
        );
    }

    #[test]
    fn test_url_path_without_leading_slash_is_joined() {
        let config = HttpClientConfig {
            base_url: "https://api.example.com/v1".into(),
            login_path: "auth/login".into(),
            ..HttpClientConfig::default()
        };

        let client = HttpAuthClient::new(config).unwrap();

        assert_eq!(
            client.url(&client.config().login_path),
            "https://api.example.com/v1/auth/login"
        );
        assert_eq!(
            client.url("//auth/me"),
            "https://api.example.com/v1/auth/me"
        );
    }

    #[test]
    fn test_config_default_paths() {
        let config = HttpClientConfig::default();

        assert_eq!(config.login_path, "/auth/login");
        assert_eq!(config.register_path, "/auth/register");
        assert_eq!(config.current_user_path, "/auth/me");
        assert_eq!(config.timeout_secs, 15);
    }
}
