// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the MELCloud API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, ParseError, ProtocolError};

/// Header carrying the session token.
pub const CONTEXT_KEY_HEADER: &str = "X-MitsContextKey";

// ============================================================================
// HttpConfig - Connection settings
// ============================================================================

/// Configuration for the MELCloud HTTP transport.
///
/// # Examples
///
/// ```
/// use melcloud_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Defaults target the public MELCloud service
/// let config = HttpConfig::new();
/// assert_eq!(config.base_url(), HttpConfig::DEFAULT_BASE_URL);
///
/// let config = HttpConfig::new()
///     .with_base_url("http://localhost:8080")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    app_version: String,
    user_agent: String,
    language: u32,
    timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfig {
    /// Base URL of the public MELCloud service.
    pub const DEFAULT_BASE_URL: &'static str = "https://app.melcloud.com/Mitsubishi.Wifi.Client";
    /// Client application version sent on login.
    pub const DEFAULT_APP_VERSION: &'static str = "1.19.1.1";
    /// User agent sent on every request.
    pub const DEFAULT_USER_AGENT: &'static str = "melcloud-rs";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            app_version: Self::DEFAULT_APP_VERSION.to_string(),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
            language: 0,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the base URL (e.g. a mock server in tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the application version sent on login.
    #[must_use]
    pub fn with_app_version(mut self, app_version: impl Into<String>) -> Self {
        self.app_version = app_version.into();
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the language code sent on login.
    #[must_use]
    pub fn with_language(mut self, language: u32) -> Self {
        self.language = language;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Returns the user agent.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the language code.
    #[must_use]
    pub fn language(&self) -> u32 {
        self.language
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidAddress`] if the base URL is not an
    /// `http://` or `https://` URL, or [`ProtocolError::Http`] if the HTTP
    /// client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            client,
            context_key: None,
        })
    }
}

// ============================================================================
// Credentials
// ============================================================================

/// MELCloud account credentials.
///
/// The password is never printed by `Debug`.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Environment variable holding the account email.
    pub const EMAIL_VAR: &'static str = "MELCLOUD_EMAIL";
    /// Environment variable holding the account password.
    pub const PASSWORD_VAR: &'static str = "MELCLOUD_PASSWORD";

    /// Creates credentials from an email and password.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Reads credentials from `MELCLOUD_EMAIL` and `MELCLOUD_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if either variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let email = lookup(Self::EMAIL_VAR).filter(|v| !v.is_empty());
        let password = lookup(Self::PASSWORD_VAR).filter(|v| !v.is_empty());
        match (email, password) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(Error::MissingCredentials),
        }
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// HttpClient - JSON request/response transport
// ============================================================================

/// HTTP client for the MELCloud JSON API.
///
/// Every request accepts JSON and, once a session exists, carries the
/// context key in the `X-MitsContextKey` header. Responses with a
/// non-success status become [`ProtocolError`]s; bodies are decoded with
/// `serde_json`.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    context_key: Option<String>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.context_key.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` once a context key is attached.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.context_key.is_some()
    }

    /// Attaches the session token sent with every subsequent request.
    #[must_use]
    pub fn with_context_key(mut self, context_key: impl Into<String>) -> Self {
        self.context_key = Some(context_key.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a `GET` request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] on transport failure or a non-success
    /// status, [`Error::Parse`] if the body is not the expected JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        tracing::debug!(url = %url, "Sending MELCloud GET request");
        self.execute(self.client.get(&url).query(query)).await
    }

    /// Sends a `POST` request with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] on transport failure or a non-success
    /// status, [`Error::Parse`] if the body is not the expected JSON.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        tracing::debug!(url = %url, "Sending MELCloud POST request");
        self.execute(self.client.post(&url).json(body)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let mut request = request.header(reqwest::header::ACCEPT, "application/json");
        if let Some(key) = &self.context_key {
            request = request.header(CONTEXT_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received MELCloud response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed.into());
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;
        tracing::trace!(len = body.len(), "Received MELCloud response body");

        if !status.is_success() {
            let details = Some(body).filter(|b| !b.trim().is_empty());
            return Err(ProtocolError::UnexpectedStatus {
                status: status.as_u16(),
                details,
            }
            .into());
        }

        serde_json::from_str(&body).map_err(|e| ParseError::Json(e).into())
    }
}
