// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed type.
//!
//! The service encodes automatic fan control as `0` and fixed speeds as
//! positive steps. How many steps a unit has is a capability of the
//! [`Device`](crate::Device); the codec itself accepts any positive step.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::ValueError;

use super::UNKNOWN_LABEL;

/// Fan speed as reported by the `SetFanSpeed` field.
///
/// # Examples
///
/// ```
/// use melcloud_lib::types::FanSpeed;
///
/// assert_eq!("auto".parse::<FanSpeed>().unwrap().code(), Some(0));
/// assert_eq!("3".parse::<FanSpeed>().unwrap().code(), Some(3));
/// assert!("0".parse::<FanSpeed>().is_err());
///
/// assert_eq!(FanSpeed::from_code(2).to_string(), "2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanSpeed {
    /// Automatic fan control.
    Auto,
    /// A fixed speed step (1 = slowest).
    Step(NonZeroU32),
    /// A negative code, which the service never documents.
    Unknown,
}

impl FanSpeed {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "fan speed";

    /// Decodes a device code. Negative codes yield [`Self::Unknown`].
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match u32::try_from(code).ok().map(NonZeroU32::new) {
            Some(None) => Self::Auto,
            Some(Some(step)) => Self::Step(step),
            None => Self::Unknown,
        }
    }

    /// Returns the device code, or `None` for [`Self::Unknown`].
    ///
    /// Steps beyond `i32::MAX` cannot be represented on the wire and also
    /// yield `None`.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Auto => Some(0),
            Self::Step(step) => i32::try_from(step.get()).ok(),
            Self::Unknown => None,
        }
    }

    /// Returns the fixed step, if any.
    #[must_use]
    pub const fn step(&self) -> Option<u32> {
        match self {
            Self::Step(step) => Some(step.get()),
            Self::Auto | Self::Unknown => None,
        }
    }

    /// Returns `true` for automatic fan control.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Step(step) => write!(f, "{step}"),
            Self::Unknown => f.write_str(UNKNOWN_LABEL),
        }
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            return Ok(Self::Auto);
        }
        s.parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .filter(|step| i32::try_from(step.get()).is_ok())
            .map(Self::Step)
            .ok_or_else(|| ValueError::invalid(Self::FIELD, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_maps_both_directions() {
        assert_eq!(FanSpeed::from_code(0), FanSpeed::Auto);
        assert_eq!(FanSpeed::from_code(0).to_string(), "auto");
        assert_eq!("auto".parse::<FanSpeed>().unwrap().code(), Some(0));
    }

    #[test]
    fn steps_pass_through() {
        for step in [1, 2, 5, 9, 100] {
            let label = step.to_string();
            assert_eq!(FanSpeed::from_code(step).to_string(), label);
            assert_eq!(label.parse::<FanSpeed>().unwrap().code(), Some(step));
        }
    }

    #[test]
    fn negative_code_is_unknown() {
        let speed = FanSpeed::from_code(-1);
        assert_eq!(speed, FanSpeed::Unknown);
        assert_eq!(speed.to_string(), "unknown");
        assert_eq!(speed.code(), None);
    }

    #[test]
    fn non_positive_or_garbage_labels_are_rejected() {
        for label in ["0", "-1", "", "Auto", "fast", "1.5", "unknown", "99999999999"] {
            let err = label.parse::<FanSpeed>().unwrap_err();
            assert!(
                matches!(err, ValueError::InvalidValue { field: "fan speed", ref value } if value == label),
                "{label}: {err:?}"
            );
        }
    }

    #[test]
    fn step_accessor() {
        assert_eq!(FanSpeed::from_code(4).step(), Some(4));
        assert_eq!(FanSpeed::Auto.step(), None);
        assert!(FanSpeed::Auto.is_auto());
        assert!(!FanSpeed::from_code(1).is_auto());
    }
}
