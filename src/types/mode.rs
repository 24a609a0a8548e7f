// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation mode of an air-to-air unit.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::UNKNOWN_LABEL;

/// Operation mode as reported by the `OperationMode` field.
///
/// # Examples
///
/// ```
/// use melcloud_lib::types::OperationMode;
///
/// let mode: OperationMode = "cool".parse().unwrap();
/// assert_eq!(mode.code(), Some(3));
///
/// assert_eq!(OperationMode::from_code(8).as_str(), "heat_cool");
/// assert_eq!(OperationMode::from_code(42), OperationMode::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationMode {
    /// Heating.
    Heat,
    /// Dehumidifying.
    Dry,
    /// Cooling.
    Cool,
    /// Fan only, no heating or cooling.
    FanOnly,
    /// Automatic heat/cool selection.
    Auto,
    /// A code this library does not recognize.
    Unknown,
}

impl OperationMode {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "operation mode";

    /// Decodes a device code. Unrecognized codes yield [`Self::Unknown`].
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Heat,
            2 => Self::Dry,
            3 => Self::Cool,
            7 => Self::FanOnly,
            8 => Self::Auto,
            _ => Self::Unknown,
        }
    }

    /// Returns the device code, or `None` for [`Self::Unknown`].
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        match self {
            Self::Heat => Some(1),
            Self::Dry => Some(2),
            Self::Cool => Some(3),
            Self::FanOnly => Some(7),
            Self::Auto => Some(8),
            Self::Unknown => None,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heat => "heat",
            Self::Dry => "dry",
            Self::Cool => "cool",
            Self::FanOnly => "fan_only",
            Self::Auto => "heat_cool",
            Self::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = ValueError;

    /// Parses a label. `"auto"` is accepted as an alias for `"heat_cool"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heat" => Ok(Self::Heat),
            "dry" => Ok(Self::Dry),
            "cool" => Ok(Self::Cool),
            "fan_only" => Ok(Self::FanOnly),
            "heat_cool" | "auto" => Ok(Self::Auto),
            _ => Err(ValueError::invalid(Self::FIELD, s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [(&str, i32); 5] = [
        ("heat", 1),
        ("dry", 2),
        ("cool", 3),
        ("fan_only", 7),
        ("heat_cool", 8),
    ];

    #[test]
    fn table_maps_both_directions() {
        for (label, code) in TABLE {
            assert_eq!(OperationMode::from_code(code).as_str(), label);
            assert_eq!(label.parse::<OperationMode>().unwrap().code(), Some(code));
        }
    }

    #[test]
    fn auto_alias() {
        assert_eq!("auto".parse::<OperationMode>().unwrap(), OperationMode::Auto);
    }

    #[test]
    fn unknown_codes_decode_to_sentinel() {
        for code in [-1, 0, 4, 5, 6, 9, 255] {
            let mode = OperationMode::from_code(code);
            assert_eq!(mode, OperationMode::Unknown);
            assert_eq!(mode.as_str(), "unknown");
            assert_eq!(mode.code(), None);
        }
    }

    #[test]
    fn unrecognized_labels_are_rejected() {
        for label in ["", "Cool", "HEAT", "fan", "unknown", "3"] {
            let err = label.parse::<OperationMode>().unwrap_err();
            assert_eq!(
                err,
                ValueError::InvalidValue {
                    field: "operation mode",
                    value: label.to_string(),
                }
            );
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(OperationMode::FanOnly.to_string(), "fan_only");
    }
}
