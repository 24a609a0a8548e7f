// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air-to-air device state record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, ValueError};
use crate::response::null_as_default;
use crate::types::{
    DateTimeParseError, DeviceType, FanSpeed, OperationMode, VaneHorizontal, VaneVertical,
    parse_timestamp,
};

use super::{EffectiveFlags, StateField};

/// State of an air-to-air (ATA) unit, as read from and written to
/// `Device/Get` and `Device/SetAta`.
///
/// The record holds both what the unit reported and what the caller wants
/// to change. Every setter updates its field and marks it in
/// [`effective_flags`](Self::effective_flags) together; a setter that fails
/// validation changes neither.
///
/// Fields the service returns but this type does not model are kept and
/// sent back unchanged on write.
///
/// # Examples
///
/// ```
/// use melcloud_lib::state::AtaDeviceState;
/// use melcloud_lib::types::OperationMode;
///
/// let mut state = AtaDeviceState::new(1234, 56);
/// state.set_operation_mode("cool").unwrap();
/// state.set_target_temperature(22.0);
///
/// assert_eq!(state.operation_mode(), OperationMode::Cool);
/// assert_eq!(state.effective_flags().bits(), 0x06);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AtaDeviceState {
    #[serde(rename = "DeviceID", deserialize_with = "null_as_default")]
    device_id: i64,
    /// Not always present in responses; restored by the client.
    #[serde(rename = "BuildingID", deserialize_with = "null_as_default")]
    building_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    mac_address: String,
    #[serde(deserialize_with = "null_as_default")]
    serial_number: String,
    #[serde(deserialize_with = "null_as_default")]
    device_type: i32,
    #[serde(deserialize_with = "null_as_default")]
    power: bool,
    #[serde(deserialize_with = "null_as_default")]
    room_temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    set_temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    operation_mode: i32,
    #[serde(deserialize_with = "null_as_default")]
    set_fan_speed: i32,
    #[serde(deserialize_with = "null_as_default")]
    vane_horizontal: i32,
    #[serde(deserialize_with = "null_as_default")]
    vane_vertical: i32,
    #[serde(deserialize_with = "null_as_default")]
    error_code: i32,
    #[serde(deserialize_with = "null_as_default")]
    has_error: bool,
    #[serde(deserialize_with = "null_as_default")]
    last_communication: String,
    #[serde(deserialize_with = "null_as_default")]
    effective_flags: EffectiveFlags,
    #[serde(deserialize_with = "null_as_default")]
    has_pending_command: bool,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl AtaDeviceState {
    /// Creates an empty state for the given device.
    ///
    /// Normally a state is obtained from
    /// [`Client::get_device_state`](crate::Client::get_device_state); an
    /// empty state is still a valid write as long as only flagged fields
    /// matter.
    #[must_use]
    pub fn new(device_id: i64, building_id: i64) -> Self {
        Self {
            device_id,
            building_id,
            ..Self::default()
        }
    }

    // ========== Identity ==========

    /// Returns the device id.
    #[must_use]
    pub fn device_id(&self) -> i64 {
        self.device_id
    }

    /// Returns the building id.
    #[must_use]
    pub fn building_id(&self) -> i64 {
        self.building_id
    }

    pub(crate) fn set_building_id(&mut self, building_id: i64) {
        self.building_id = building_id;
    }

    /// Returns the MAC address.
    #[must_use]
    pub fn mac_address(&self) -> &str {
        &self.mac_address
    }

    /// Returns the serial number.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Returns the product line.
    #[must_use]
    pub fn device_type(&self) -> DeviceType {
        DeviceType::from_code(self.device_type)
    }

    // ========== Readings ==========

    /// Returns whether the unit is powered on.
    #[must_use]
    pub fn power(&self) -> bool {
        self.power
    }

    /// Returns the measured room temperature in °C.
    #[must_use]
    pub fn room_temperature(&self) -> f64 {
        self.room_temperature
    }

    /// Returns the target temperature in °C.
    #[must_use]
    pub fn target_temperature(&self) -> f64 {
        self.set_temperature
    }

    /// Returns the decoded operation mode.
    #[must_use]
    pub fn operation_mode(&self) -> OperationMode {
        OperationMode::from_code(self.operation_mode)
    }

    /// Returns the raw `OperationMode` code.
    #[must_use]
    pub fn operation_mode_code(&self) -> i32 {
        self.operation_mode
    }

    /// Returns the decoded fan speed.
    #[must_use]
    pub fn fan_speed(&self) -> FanSpeed {
        FanSpeed::from_code(self.set_fan_speed)
    }

    /// Returns the raw `SetFanSpeed` code.
    #[must_use]
    pub fn fan_speed_code(&self) -> i32 {
        self.set_fan_speed
    }

    /// Returns the decoded vertical vane position.
    #[must_use]
    pub fn vane_vertical(&self) -> VaneVertical {
        VaneVertical::from_code(self.vane_vertical)
    }

    /// Returns the raw `VaneVertical` code.
    #[must_use]
    pub fn vane_vertical_code(&self) -> i32 {
        self.vane_vertical
    }

    /// Returns the decoded horizontal vane position.
    #[must_use]
    pub fn vane_horizontal(&self) -> VaneHorizontal {
        VaneHorizontal::from_code(self.vane_horizontal)
    }

    /// Returns the raw `VaneHorizontal` code.
    #[must_use]
    pub fn vane_horizontal_code(&self) -> i32 {
        self.vane_horizontal
    }

    /// Returns the unit's error code.
    #[must_use]
    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    /// Returns whether the unit reports an error.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Returns the raw `LastCommunication` timestamp.
    #[must_use]
    pub fn last_communication(&self) -> &str {
        &self.last_communication
    }

    /// Parses the `LastCommunication` timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeParseError`] if the timestamp is malformed.
    pub fn last_communication_time(&self) -> Result<DateTime<Utc>, DateTimeParseError> {
        parse_timestamp(&self.last_communication)
    }

    /// Returns a field the service sent that this type does not model,
    /// e.g. `"OutdoorTemperature"`.
    #[must_use]
    pub fn extra_field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    // ========== Pending changes ==========

    /// Returns the fields pending for the next write.
    #[must_use]
    pub fn effective_flags(&self) -> EffectiveFlags {
        self.effective_flags
    }

    /// Returns `true` if at least one field is pending.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        !self.effective_flags.is_empty()
    }

    /// Returns the `HasPendingCommand` marker.
    #[must_use]
    pub fn has_pending_command(&self) -> bool {
        self.has_pending_command
    }

    /// Starts a new edit session by clearing all pending fields.
    pub fn reset_effective_flags(&mut self) {
        self.effective_flags.clear();
    }

    /// Sets the power state.
    pub fn set_power(&mut self, power: bool) {
        self.power = power;
        self.effective_flags.set(StateField::Power);
    }

    /// Sets the operation mode from its label (`"heat"`, `"dry"`, `"cool"`,
    /// `"fan_only"`, `"heat_cool"`).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidValue`] for an unrecognized label.
    pub fn set_operation_mode(&mut self, mode: &str) -> Result<(), ValueError> {
        let code = encode(mode.parse::<OperationMode>()?.code(), OperationMode::FIELD, mode)?;
        self.operation_mode = code;
        self.effective_flags.set(StateField::OperationMode);
        Ok(())
    }

    /// Sets the target temperature in °C.
    ///
    /// The value is sent as given. Rounding to the unit's increment is up to
    /// the caller, see [`Device::round_temperature`](crate::Device::round_temperature).
    pub fn set_target_temperature(&mut self, temperature: f64) {
        self.set_temperature = temperature;
        self.effective_flags.set(StateField::TargetTemperature);
    }

    /// Sets the fan speed from its label (`"auto"` or a positive step such
    /// as `"3"`).
    ///
    /// The step is not checked against the unit's capabilities, see
    /// [`Device::check_fan_speed`](crate::Device::check_fan_speed).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidValue`] for an unrecognized label.
    pub fn set_fan_speed(&mut self, speed: &str) -> Result<(), ValueError> {
        let code = encode(speed.parse::<FanSpeed>()?.code(), FanSpeed::FIELD, speed)?;
        self.set_fan_speed = code;
        self.effective_flags.set(StateField::FanSpeed);
        Ok(())
    }

    /// Sets the vertical vane position from its label (`"auto"`, `"1"`-`"5"`,
    /// `"swing"`).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidValue`] for an unrecognized label.
    pub fn set_vane_vertical(&mut self, position: &str) -> Result<(), ValueError> {
        let code = encode(
            position.parse::<VaneVertical>()?.code(),
            VaneVertical::FIELD,
            position,
        )?;
        self.vane_vertical = code;
        self.effective_flags.set(StateField::VaneVertical);
        Ok(())
    }

    /// Sets the horizontal vane position from its label (`"auto"`,
    /// `"1"`-`"5"`, `"split"`, `"swing"`).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidValue`] for an unrecognized label.
    pub fn set_vane_horizontal(&mut self, position: &str) -> Result<(), ValueError> {
        let code = encode(
            position.parse::<VaneHorizontal>()?.code(),
            VaneHorizontal::FIELD,
            position,
        )?;
        self.vane_horizontal = code;
        self.effective_flags.set(StateField::VaneHorizontal);
        Ok(())
    }

    /// Checks that the state carries at least one change and marks it as an
    /// intentional command.
    ///
    /// The flags are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPendingChanges`] if no field is pending.
    pub fn mark_pending_command(&mut self) -> Result<(), Error> {
        if self.effective_flags.is_empty() {
            return Err(Error::NoPendingChanges);
        }
        self.has_pending_command = true;
        Ok(())
    }
}

/// Parsed labels always have a code; this only guards the `Unknown` variants.
fn encode(code: Option<i32>, field: &'static str, label: &str) -> Result<i32, ValueError> {
    code.ok_or_else(|| ValueError::invalid(field, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> Value {
        serde_json::json!({
            "DeviceID": 1234,
            "DeviceType": 0,
            "MacAddress": "aa:bb:cc:dd:ee:ff",
            "SerialNumber": "1234567890",
            "Power": true,
            "RoomTemperature": 21.5,
            "SetTemperature": 23.0,
            "OperationMode": 1,
            "SetFanSpeed": 3,
            "VaneHorizontal": 12,
            "VaneVertical": 7,
            "ErrorCode": 8000,
            "HasError": false,
            "LastCommunication": "2024-01-15T10:30:00.123",
            "EffectiveFlags": 0,
            "HasPendingCommand": false,
            "OutdoorTemperature": 4.0,
            "NumberOfFanSpeeds": 5
        })
    }

    #[test]
    fn new_state_has_no_pending_changes() {
        let state = AtaDeviceState::new(1, 2);
        assert!(state.effective_flags().is_empty());
        assert!(!state.has_pending_changes());
        assert!(!state.has_pending_command());
        assert_eq!(state.device_id(), 1);
        assert_eq!(state.building_id(), 2);
    }

    #[test]
    fn decode_read_response() {
        let state: AtaDeviceState = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(state.device_id(), 1234);
        assert_eq!(state.building_id(), 0);
        assert_eq!(state.device_type(), DeviceType::AirToAir);
        assert!(state.power());
        assert!((state.room_temperature() - 21.5).abs() < f64::EPSILON);
        assert!((state.target_temperature() - 23.0).abs() < f64::EPSILON);
        assert_eq!(state.operation_mode(), OperationMode::Heat);
        assert_eq!(state.fan_speed().to_string(), "3");
        assert_eq!(state.vane_horizontal(), VaneHorizontal::Swing);
        assert_eq!(state.vane_vertical(), VaneVertical::Swing);
        assert_eq!(state.error_code(), 8000);
        assert!(!state.has_error());
        assert!(state.last_communication_time().is_ok());
        assert_eq!(
            state.extra_field("OutdoorTemperature"),
            Some(&serde_json::json!(4.0))
        );
    }

    #[test]
    fn decode_null_numeric_fields_as_zero() {
        let state: AtaDeviceState = serde_json::from_str(
            r#"{"DeviceID": 1, "OperationMode": 3, "VaneHorizontal": null}"#,
        )
        .unwrap();
        assert_eq!(state.operation_mode(), OperationMode::Cool);
        assert_eq!(state.vane_horizontal(), VaneHorizontal::Auto);

        let mut json = sample_json();
        for field in [
            "DeviceType",
            "Power",
            "RoomTemperature",
            "SetTemperature",
            "OperationMode",
            "SetFanSpeed",
            "VaneVertical",
            "ErrorCode",
            "HasError",
            "EffectiveFlags",
            "HasPendingCommand",
        ] {
            json[field] = Value::Null;
        }
        let state: AtaDeviceState = serde_json::from_value(json).unwrap();

        assert_eq!(state.device_id(), 1234);
        assert_eq!(state.device_type(), DeviceType::AirToAir);
        assert!(!state.power());
        assert!(state.room_temperature().abs() < f64::EPSILON);
        assert!(state.target_temperature().abs() < f64::EPSILON);
        assert_eq!(state.operation_mode(), OperationMode::Unknown);
        assert_eq!(state.fan_speed(), FanSpeed::Auto);
        assert_eq!(state.vane_vertical(), VaneVertical::Auto);
        assert_eq!(state.error_code(), 0);
        assert!(state.effective_flags().is_empty());
        assert!(!state.has_pending_command());
    }

    #[test]
    fn decode_tolerates_unknown_codes_and_nulls() {
        let mut json = sample_json();
        json["OperationMode"] = serde_json::json!(42);
        json["VaneVertical"] = serde_json::json!(9);
        json["VaneHorizontal"] = serde_json::json!(-3);
        json["LastCommunication"] = Value::Null;
        json["MacAddress"] = Value::Null;

        let state: AtaDeviceState = serde_json::from_value(json).unwrap();
        assert_eq!(state.operation_mode().as_str(), "unknown");
        assert_eq!(state.operation_mode_code(), 42);
        assert_eq!(state.vane_vertical().as_str(), "unknown");
        assert_eq!(state.vane_horizontal().as_str(), "unknown");
        assert_eq!(state.last_communication(), "");
        assert_eq!(state.mac_address(), "");
    }

    #[test]
    fn decode_missing_fields_defaults() {
        let state: AtaDeviceState = serde_json::from_str(r#"{"DeviceID": 7}"#).unwrap();
        assert_eq!(state.device_id(), 7);
        assert!(state.effective_flags().is_empty());
    }

    #[test]
    fn set_mode_and_temperature() {
        let mut state = AtaDeviceState::new(1, 2);
        state.set_operation_mode("cool").unwrap();
        state.set_target_temperature(22.0);

        assert_eq!(state.operation_mode_code(), 3);
        assert!((state.target_temperature() - 22.0).abs() < f64::EPSILON);
        assert_eq!(state.effective_flags().bits(), 0x06);
    }

    #[test]
    fn each_setter_sets_exactly_its_bit() {
        let cases: [(StateField, fn(&mut AtaDeviceState)); 6] = [
            (StateField::Power, |s| s.set_power(true)),
            (StateField::OperationMode, |s| {
                s.set_operation_mode("dry").unwrap();
            }),
            (StateField::TargetTemperature, |s| {
                s.set_target_temperature(19.5);
            }),
            (StateField::FanSpeed, |s| s.set_fan_speed("auto").unwrap()),
            (StateField::VaneVertical, |s| {
                s.set_vane_vertical("2").unwrap();
            }),
            (StateField::VaneHorizontal, |s| {
                s.set_vane_horizontal("split").unwrap();
            }),
        ];

        for (field, apply) in cases {
            let mut state = AtaDeviceState::new(1, 2);
            apply(&mut state);
            assert_eq!(state.effective_flags().bits(), field.bit(), "{field:?}");

            // Repeating the call leaves the flags unchanged.
            apply(&mut state);
            assert_eq!(state.effective_flags().bits(), field.bit(), "{field:?}");
        }
    }

    #[test]
    fn setters_accumulate_bits() {
        let mut state = AtaDeviceState::new(1, 2);
        state.set_power(true);
        state.set_vane_horizontal("swing").unwrap();
        state.set_fan_speed("5").unwrap();
        assert_eq!(state.effective_flags().bits(), 0x01 | 0x08 | 0x100);
    }

    #[test]
    fn repeated_setter_updates_value_but_not_flags() {
        let mut state = AtaDeviceState::new(1, 2);
        state.set_fan_speed("2").unwrap();
        state.set_fan_speed("4").unwrap();
        assert_eq!(state.fan_speed_code(), 4);
        assert_eq!(state.effective_flags().bits(), 0x08);
    }

    #[test]
    fn failed_setter_leaves_state_unchanged() {
        let mut state: AtaDeviceState = serde_json::from_value(sample_json()).unwrap();
        let before = state.clone();

        let err = state.set_operation_mode("turbo").unwrap_err();
        assert!(matches!(
            err,
            ValueError::InvalidValue { field: "operation mode", .. }
        ));
        assert!(state.set_fan_speed("0").is_err());
        assert!(state.set_vane_vertical("split").is_err());
        assert!(state.set_vane_horizontal("6").is_err());

        assert_eq!(state, before);
    }

    #[test]
    fn guard_rejects_empty_flags() {
        let mut state = AtaDeviceState::new(1, 2);
        assert!(matches!(
            state.mark_pending_command(),
            Err(Error::NoPendingChanges)
        ));
        assert!(!state.has_pending_command());
    }

    #[test]
    fn guard_forces_pending_command_without_touching_flags() {
        let mut state = AtaDeviceState::new(1, 2);
        state.set_vane_vertical("swing").unwrap();
        state.mark_pending_command().unwrap();
        assert!(state.has_pending_command());
        assert_eq!(state.effective_flags().bits(), 0x10);
    }

    #[test]
    fn reset_starts_new_edit_session() {
        let mut state = AtaDeviceState::new(1, 2);
        state.set_power(false);
        state.reset_effective_flags();
        assert!(state.effective_flags().is_empty());
        assert!(!state.power());
    }

    #[test]
    fn write_payload_shape() {
        let mut state: AtaDeviceState = serde_json::from_value(sample_json()).unwrap();
        state.set_operation_mode("fan_only").unwrap();
        state.set_vane_horizontal("3").unwrap();
        state.mark_pending_command().unwrap();

        let payload = serde_json::to_value(&state).unwrap();
        assert_eq!(payload["OperationMode"], 7);
        assert_eq!(payload["VaneHorizontal"], 3);
        assert_eq!(payload["EffectiveFlags"], 0x102);
        assert_eq!(payload["HasPendingCommand"], true);
        assert_eq!(payload["DeviceID"], 1234);
        assert_eq!(payload["OutdoorTemperature"], 4.0);
        assert_eq!(payload["NumberOfFanSpeeds"], 5);
    }
}
