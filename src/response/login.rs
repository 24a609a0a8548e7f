// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Login envelope (`Login/ClientLogin`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;

/// Body of a `Login/ClientLogin` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest<'a> {
    /// Account email.
    pub email: &'a str,
    /// Account password.
    pub password: &'a str,
    /// Language code.
    pub language: u32,
    /// Client application version the service expects.
    pub app_version: &'a str,
    /// Request a long-lived session.
    pub persist: bool,
    /// Always `null` for this client.
    pub captcha_response: Option<&'a str>,
}

/// Login response.
///
/// On failure the service still answers `200 OK` but fills `ErrorId`
/// and/or `ErrorCode`.
///
/// # Examples
///
/// ```
/// use melcloud_lib::response::LoginResponse;
///
/// let json = r#"{"ErrorId": null, "LoginData": {"ContextKey": "abc"}, "LoginMinutes": 60}"#;
/// let response: LoginResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.into_context_key().unwrap(), "abc");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoginResponse {
    /// Error identifier, `null` on success.
    pub error_id: Option<Value>,
    /// Error code, `null` on success.
    pub error_code: Option<Value>,
    /// Session data, `null` on failure.
    pub login_data: Option<LoginData>,
    /// Session lifetime in minutes.
    pub login_minutes: Option<i64>,
}

/// Session data of a successful login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoginData {
    /// Session token, sent as `X-MitsContextKey` on every request.
    pub context_key: String,
}

impl LoginResponse {
    /// Extracts the context key.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::LoginRejected`] if the service reported an
    /// error, or [`ProtocolError::MissingContextKey`] if the key is empty.
    pub fn into_context_key(self) -> Result<String, ProtocolError> {
        if self.error_id.is_some() || self.error_code.is_some() {
            return Err(ProtocolError::LoginRejected(format!(
                "ErrorId={}, ErrorCode={}",
                display_or_null(self.error_id.as_ref()),
                display_or_null(self.error_code.as_ref())
            )));
        }

        self.login_data
            .map(|data| data.context_key)
            .filter(|key| !key.is_empty())
            .ok_or(ProtocolError::MissingContextKey)
    }
}

fn display_or_null(value: Option<&Value>) -> String {
    value.map_or_else(|| "null".to_string(), ToString::to_string)
}
