// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the MELCloud client.
//!
//! The hierarchy separates value validation (encoding labels into device
//! codes), protocol communication, JSON parsing, and device operations.
//! Decoding an unknown device code is never an error; see
//! [`types`](crate::types).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value could not be encoded for the device.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Communication with the MELCloud service failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A response could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device does not support the requested operation.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// A write was attempted without any pending change.
    #[error("no pending changes: set at least one field before writing device state")]
    NoPendingChanges,

    /// Credentials were not provided.
    #[error("MELCLOUD_EMAIL and MELCLOUD_PASSWORD environment variables must be set")]
    MissingCredentials,
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A label is not recognized for the given field.
    #[error("invalid {field}: {value:?}")]
    InvalidValue {
        /// The field being encoded (e.g. `"operation mode"`).
        field: &'static str,
        /// The offending input.
        value: String,
    },

    /// A numeric value is outside the range a device supports.
    #[error("{field} {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The field being checked.
        field: &'static str,
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The value that was provided.
        actual: u32,
    },
}

impl ValueError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

/// Errors related to HTTP communication with MELCloud.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the session or credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The login endpoint answered with an error payload.
    #[error("login rejected: {0}")]
    LoginRejected(String),

    /// The login response did not carry a context key.
    #[error("login response did not contain a context key")]
    MissingContextKey,

    /// The service answered with a non-success status.
    #[error("unexpected HTTP status {status}{}", details_suffix(.details.as_deref()))]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, if the service sent one.
        details: Option<String>,
    },

    /// Invalid base URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

fn details_suffix(details: Option<&str>) -> String {
    details.map(|d| format!(": {d}")).unwrap_or_default()
}

/// Errors related to parsing MELCloud responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to device operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Writes are only implemented for air-to-air units.
    #[error("unsupported device type for state writes: {0}")]
    UnsupportedDeviceType(i32),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_display_names_field_and_value() {
        let err = ValueError::invalid("operation mode", "warm");
        assert_eq!(err.to_string(), "invalid operation mode: \"warm\"");
    }

    #[test]
    fn out_of_range_display() {
        let err = ValueError::OutOfRange {
            field: "fan speed",
            min: 1,
            max: 5,
            actual: 7,
        };
        assert_eq!(err.to_string(), "fan speed 7 is out of range [1, 5]");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::invalid("fan speed", "fast").into();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidValue {
                field: "fan speed",
                ..
            })
        ));
    }

    #[test]
    fn unexpected_status_display() {
        let err = ProtocolError::UnexpectedStatus {
            status: 500,
            details: Some("{\"Message\":\"boom\"}".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 500: {\"Message\":\"boom\"}"
        );

        let err = ProtocolError::UnexpectedStatus {
            status: 404,
            details: None,
        };
        assert_eq!(err.to_string(), "unexpected HTTP status 404");
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::UnsupportedDeviceType(1);
        assert_eq!(
            err.to_string(),
            "unsupported device type for state writes: 1"
        );
    }
}
