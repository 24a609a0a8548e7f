// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timestamp parsing for MELCloud responses.
//!
//! MELCloud reports times such as `LastCommunication` as ISO 8601 without a
//! timezone and with a varying number of fractional digits:
//!
//! - `"2024-01-15T10:30:00"`
//! - `"2024-01-15T10:30:00.123"`
//! - `"2024-01-15T10:30:00.1234567"`
//!
//! These are UTC. Timestamps carrying an explicit offset are also accepted.
//!
//! # Examples
//!
//! ```
//! use melcloud_lib::types::parse_timestamp;
//! use chrono::Timelike;
//!
//! let dt = parse_timestamp("2024-01-15T10:30:00.1234567").unwrap();
//! assert_eq!(dt.hour(), 10);
//! assert_eq!(dt.nanosecond(), 123_456_700);
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};

/// Error returned when parsing a timestamp string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseError {
    input: String,
}

impl DateTimeParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// Returns the input string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to parse timestamp: '{}' (expected ISO 8601 date-time)",
            self.input
        )
    }
}

impl std::error::Error for DateTimeParseError {}

/// Parses a MELCloud timestamp into a UTC datetime.
///
/// Any number of fractional second digits (including none) is accepted.
/// Values without an offset are interpreted as UTC.
///
/// # Errors
///
/// Returns [`DateTimeParseError`] if the input is not an ISO 8601 date-time.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, DateTimeParseError> {
    let s = s.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(datetime.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| DateTimeParseError::new(s))
}
