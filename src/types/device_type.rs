// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MELCloud product lines.

use std::fmt;

/// Product line reported in the `DeviceType` field.
///
/// Only [`DeviceType::AirToAir`] units can be written by this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Air-to-air split unit (ATA).
    AirToAir,
    /// Air-to-water heat pump (ATW).
    AirToWater,
    /// Energy recovery ventilator (ERV).
    EnergyRecoveryVentilator,
    /// Any other code.
    Unknown(i32),
}

impl DeviceType {
    /// Decodes a device type code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::AirToAir,
            1 => Self::AirToWater,
            3 => Self::EnergyRecoveryVentilator,
            other => Self::Unknown(other),
        }
    }

    /// Returns the device type code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::AirToAir => 0,
            Self::AirToWater => 1,
            Self::EnergyRecoveryVentilator => 3,
            Self::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AirToAir => f.write_str("ATA"),
            Self::AirToWater => f.write_str("ATW"),
            Self::EnergyRecoveryVentilator => f.write_str("ERV"),
            Self::Unknown(code) => write!(f, "unknown ({code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(DeviceType::from_code(0), DeviceType::AirToAir);
        assert_eq!(DeviceType::from_code(1), DeviceType::AirToWater);
        assert_eq!(DeviceType::from_code(3), DeviceType::EnergyRecoveryVentilator);
    }

    #[test]
    fn unknown_code_is_preserved() {
        let kind = DeviceType::from_code(2);
        assert_eq!(kind, DeviceType::Unknown(2));
        assert_eq!(kind.code(), 2);
        assert_eq!(kind.to_string(), "unknown (2)");
    }
}
