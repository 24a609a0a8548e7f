// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device descriptors returned by discovery.
//!
//! A [`Device`] carries the identity of a unit and the limits it supports.
//! [`AtaDeviceState`](crate::state::AtaDeviceState) deliberately knows
//! nothing about these limits, so callers that want to stay within them use
//! the helpers here before calling the state setters.

use serde::Deserialize;

use crate::error::ValueError;
use crate::response::null_as_default;
use crate::types::{DeviceType, FanSpeed, OperationMode};

/// Identity and capabilities of a MELCloud unit.
///
/// # Examples
///
/// ```
/// use melcloud_lib::Device;
/// use melcloud_lib::types::OperationMode;
///
/// let device: Device = serde_json::from_str(r#"{
///     "DeviceID": 1234,
///     "BuildingID": 56,
///     "DeviceName": "Living room",
///     "TemperatureIncrement": 0.5,
///     "MinTempHeat": 10.0,
///     "MaxTempHeat": 31.0
/// }"#).unwrap();
///
/// assert_eq!(device.round_temperature(21.3), 21.5);
/// assert_eq!(device.temperature_range(OperationMode::Heat), Some((10.0, 31.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Device {
    /// Device id, required by every per-device call.
    #[serde(rename = "DeviceID", deserialize_with = "null_as_default")]
    pub device_id: i64,
    /// Building id, required by every per-device call.
    #[serde(rename = "BuildingID", deserialize_with = "null_as_default")]
    pub building_id: i64,
    /// User-facing name.
    #[serde(deserialize_with = "null_as_default")]
    pub device_name: String,
    /// MAC address of the Wi-Fi adapter.
    #[serde(deserialize_with = "null_as_default")]
    pub mac_address: String,
    /// Serial number.
    #[serde(deserialize_with = "null_as_default")]
    pub serial_number: String,
    /// Access level of the logged-in user.
    #[serde(deserialize_with = "null_as_default")]
    pub access_level: i32,
    /// Raw product line code, see [`Device::kind`].
    #[serde(deserialize_with = "null_as_default")]
    pub device_type: i32,
    /// Wi-Fi signal strength (dBm).
    #[serde(deserialize_with = "null_as_default")]
    pub wifi_signal_strength: i32,
    /// Smallest target temperature step in °C.
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_increment: f64,
    /// Minimum target temperature in heat mode.
    #[serde(deserialize_with = "null_as_default")]
    pub min_temp_heat: f64,
    /// Maximum target temperature in heat mode.
    #[serde(deserialize_with = "null_as_default")]
    pub max_temp_heat: f64,
    /// Minimum target temperature in cool and dry modes.
    #[serde(deserialize_with = "null_as_default")]
    pub min_temp_cool_dry: f64,
    /// Maximum target temperature in cool and dry modes.
    #[serde(deserialize_with = "null_as_default")]
    pub max_temp_cool_dry: f64,
    /// Minimum target temperature in auto mode.
    #[serde(deserialize_with = "null_as_default")]
    pub min_temp_automatic: f64,
    /// Maximum target temperature in auto mode.
    #[serde(deserialize_with = "null_as_default")]
    pub max_temp_automatic: f64,
    /// Number of fixed fan speed steps, 0 if not reported.
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_fan_speeds: u32,
}

impl Device {
    /// Returns the decoded product line.
    #[must_use]
    pub fn kind(&self) -> DeviceType {
        DeviceType::from_code(self.device_type)
    }

    /// Rounds a temperature to the nearest supported increment.
    ///
    /// Returns the input unchanged when no increment is reported.
    #[must_use]
    pub fn round_temperature(&self, temperature: f64) -> f64 {
        if self.temperature_increment > 0.0 {
            (temperature / self.temperature_increment).round() * self.temperature_increment
        } else {
            temperature
        }
    }

    /// Returns the `(min, max)` target temperature range for a mode.
    ///
    /// Fan-only and unknown modes have no target temperature. Ranges the
    /// unit does not report (both bounds zero) yield `None`.
    #[must_use]
    pub fn temperature_range(&self, mode: OperationMode) -> Option<(f64, f64)> {
        let range = match mode {
            OperationMode::Heat => (self.min_temp_heat, self.max_temp_heat),
            OperationMode::Cool | OperationMode::Dry => {
                (self.min_temp_cool_dry, self.max_temp_cool_dry)
            }
            OperationMode::Auto => (self.min_temp_automatic, self.max_temp_automatic),
            OperationMode::FanOnly | OperationMode::Unknown => return None,
        };
        #[allow(clippy::float_cmp)]
        let unreported = range == (0.0, 0.0);
        if unreported { None } else { Some(range) }
    }

    /// Checks a fan speed against the number of steps the unit supports.
    ///
    /// When the unit does not report its step count any positive step is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] if the step exceeds the supported
    /// count, or [`ValueError::InvalidValue`] for [`FanSpeed::Unknown`].
    pub fn check_fan_speed(&self, speed: FanSpeed) -> Result<(), ValueError> {
        match speed {
            FanSpeed::Auto => Ok(()),
            FanSpeed::Step(step) => {
                let step = step.get();
                if self.number_of_fan_speeds > 0 && step > self.number_of_fan_speeds {
                    Err(ValueError::OutOfRange {
                        field: FanSpeed::FIELD,
                        min: 1,
                        max: self.number_of_fan_speeds,
                        actual: step,
                    })
                } else {
                    Ok(())
                }
            }
            FanSpeed::Unknown => Err(ValueError::invalid(FanSpeed::FIELD, &speed.to_string())),
        }
    }
}
