// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vane (louvre) positions.
//!
//! Both axes share the labels `auto`, `1`-`5` and `swing`, but the swing
//! codes differ and only the horizontal vane has a `split` position.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::UNKNOWN_LABEL;

/// Fixed position index shared by both vanes (1-5).
const POSITION_LABELS: [&str; 5] = ["1", "2", "3", "4", "5"];

fn position_label(position: u8) -> &'static str {
    POSITION_LABELS
        .get(usize::from(position).wrapping_sub(1))
        .copied()
        .unwrap_or(UNKNOWN_LABEL)
}

fn parse_position(s: &str) -> Option<u8> {
    POSITION_LABELS
        .iter()
        .position(|label| *label == s)
        .and_then(|i| u8::try_from(i + 1).ok())
}

/// Vertical vane position (`VaneVertical`).
///
/// # Examples
///
/// ```
/// use melcloud_lib::types::VaneVertical;
///
/// assert_eq!("swing".parse::<VaneVertical>().unwrap().code(), Some(7));
/// assert_eq!(VaneVertical::from_code(3).as_str(), "3");
/// assert_eq!(VaneVertical::from_code(8).as_str(), "unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VaneVertical {
    /// Automatic positioning.
    Auto,
    /// Fixed position 1-5 (1 = top).
    Position(u8),
    /// Continuous swing.
    Swing,
    /// A code this library does not recognize.
    Unknown,
}

impl VaneVertical {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "vertical vane position";

    /// Decodes a device code. Unrecognized codes yield [`Self::Unknown`].
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Auto,
            // Range checked, cast cannot truncate.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            1..=5 => Self::Position(code as u8),
            7 => Self::Swing,
            _ => Self::Unknown,
        }
    }

    /// Returns the device code, or `None` for [`Self::Unknown`].
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        match self {
            Self::Auto => Some(0),
            Self::Position(p @ 1..=5) => Some(*p as i32),
            Self::Swing => Some(7),
            Self::Position(_) | Self::Unknown => None,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Position(p) => position_label(*p),
            Self::Swing => "swing",
            Self::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for VaneVertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VaneVertical {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "swing" => Ok(Self::Swing),
            _ => parse_position(s)
                .map(Self::Position)
                .ok_or_else(|| ValueError::invalid(Self::FIELD, s)),
        }
    }
}

/// Horizontal vane position (`VaneHorizontal`).
///
/// # Examples
///
/// ```
/// use melcloud_lib::types::VaneHorizontal;
///
/// assert_eq!("split".parse::<VaneHorizontal>().unwrap().code(), Some(8));
/// assert_eq!(VaneHorizontal::from_code(12).as_str(), "swing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VaneHorizontal {
    /// Automatic positioning.
    Auto,
    /// Fixed position 1-5 (1 = leftmost).
    Position(u8),
    /// Airflow split to both sides.
    Split,
    /// Continuous swing.
    Swing,
    /// A code this library does not recognize.
    Unknown,
}

impl VaneHorizontal {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "horizontal vane position";

    /// Decodes a device code. Unrecognized codes yield [`Self::Unknown`].
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Auto,
            // Range checked, cast cannot truncate.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            1..=5 => Self::Position(code as u8),
            8 => Self::Split,
            12 => Self::Swing,
            _ => Self::Unknown,
        }
    }

    /// Returns the device code, or `None` for [`Self::Unknown`].
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        match self {
            Self::Auto => Some(0),
            Self::Position(p @ 1..=5) => Some(*p as i32),
            Self::Split => Some(8),
            Self::Swing => Some(12),
            Self::Position(_) | Self::Unknown => None,
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Position(p) => position_label(*p),
            Self::Split => "split",
            Self::Swing => "swing",
            Self::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for VaneHorizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VaneHorizontal {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "split" => Ok(Self::Split),
            "swing" => Ok(Self::Swing),
            _ => parse_position(s)
                .map(Self::Position)
                .ok_or_else(|| ValueError::invalid(Self::FIELD, s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERTICAL: [(&str, i32); 7] = [
        ("auto", 0),
        ("1", 1),
        ("2", 2),
        ("3", 3),
        ("4", 4),
        ("5", 5),
        ("swing", 7),
    ];

    const HORIZONTAL: [(&str, i32); 8] = [
        ("auto", 0),
        ("1", 1),
        ("2", 2),
        ("3", 3),
        ("4", 4),
        ("5", 5),
        ("split", 8),
        ("swing", 12),
    ];

    #[test]
    fn vertical_table_maps_both_directions() {
        for (label, code) in VERTICAL {
            assert_eq!(VaneVertical::from_code(code).as_str(), label);
            assert_eq!(label.parse::<VaneVertical>().unwrap().code(), Some(code));
        }
    }

    #[test]
    fn horizontal_table_maps_both_directions() {
        for (label, code) in HORIZONTAL {
            assert_eq!(VaneHorizontal::from_code(code).as_str(), label);
            assert_eq!(label.parse::<VaneHorizontal>().unwrap().code(), Some(code));
        }
    }

    #[test]
    fn vertical_unknown_codes() {
        for code in [-1, 6, 8, 12, 100] {
            assert_eq!(VaneVertical::from_code(code), VaneVertical::Unknown);
            assert_eq!(VaneVertical::from_code(code).as_str(), "unknown");
        }
    }

    #[test]
    fn horizontal_unknown_codes() {
        for code in [-1, 6, 7, 9, 11, 13] {
            assert_eq!(VaneHorizontal::from_code(code), VaneHorizontal::Unknown);
            assert_eq!(VaneHorizontal::from_code(code).as_str(), "unknown");
        }
    }

    #[test]
    fn split_is_horizontal_only() {
        let err = "split".parse::<VaneVertical>().unwrap_err();
        assert_eq!(
            err,
            ValueError::InvalidValue {
                field: "vertical vane position",
                value: "split".to_string(),
            }
        );
    }

    #[test]
    fn unrecognized_labels_are_rejected() {
        for label in ["0", "6", "Swing", "", "unknown", "left"] {
            assert!(matches!(
                label.parse::<VaneVertical>(),
                Err(ValueError::InvalidValue { field: "vertical vane position", .. })
            ));
            assert!(matches!(
                label.parse::<VaneHorizontal>(),
                Err(ValueError::InvalidValue { field: "horizontal vane position", .. })
            ));
        }
    }

    #[test]
    fn out_of_range_position_has_no_code() {
        assert_eq!(VaneVertical::Position(9).code(), None);
        assert_eq!(VaneVertical::Position(9).as_str(), "unknown");
        assert_eq!(VaneHorizontal::Position(0).code(), None);
    }
}
