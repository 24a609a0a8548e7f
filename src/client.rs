// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authenticated MELCloud client.
//!
//! A [`Client`] only exists after a successful login (or when resuming a
//! known session), so every method on it is an authenticated call.
//!
//! ```no_run
//! use melcloud_lib::Client;
//!
//! # async fn example() -> melcloud_lib::Result<()> {
//! let client = Client::login_from_env().await?;
//!
//! for device in client.list_devices().await? {
//!     let state = client
//!         .get_device_state(device.device_id, device.building_id)
//!         .await?;
//!     println!("{}: {} at {}°C", device.device_name, state.operation_mode(), state.room_temperature());
//! }
//! # Ok(())
//! # }
//! ```

use crate::device::Device;
use crate::error::{DeviceError, Result};
use crate::protocol::{Credentials, HttpClient, HttpConfig};
use crate::response::{Building, LoginRequest, LoginResponse, flatten_devices};
use crate::state::AtaDeviceState;
use crate::types::{DeviceType, FanSpeed, OperationMode, VaneHorizontal, VaneVertical};

/// Authenticated client for the MELCloud API.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Logs in with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::LoginRejected`](crate::ProtocolError::LoginRejected)
    /// if the service refuses the credentials,
    /// [`ProtocolError::MissingContextKey`](crate::ProtocolError::MissingContextKey)
    /// if it answers without a session token, or any transport error.
    pub async fn login(config: HttpConfig, credentials: &Credentials) -> Result<Self> {
        let language = config.language();
        let app_version = config.app_version().to_owned();
        let http = config.into_client()?;

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
            language,
            app_version: &app_version,
            persist: true,
            captcha_response: None,
        };

        tracing::debug!("Logging in to MELCloud");
        let response: LoginResponse = http.post_json("Login/ClientLogin", &request).await?;
        let context_key = response.into_context_key()?;
        tracing::debug!("MELCloud login succeeded");

        Ok(Self {
            http: http.with_context_key(context_key),
        })
    }

    /// Logs in to the public service with credentials from
    /// `MELCLOUD_EMAIL` and `MELCLOUD_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`](crate::Error::MissingCredentials)
    /// if the variables are not set, otherwise the errors of
    /// [`login`](Self::login).
    pub async fn login_from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        Self::login(HttpConfig::new(), &credentials).await
    }

    /// Resumes a session from a context key obtained earlier.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_context_key(config: HttpConfig, context_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: config.into_client()?.with_context_key(context_key),
        })
    }

    /// Lists every device in every building of the account.
    ///
    /// Devices listed in several places of the building tree are returned
    /// once.
    ///
    /// # Errors
    ///
    /// Returns any transport or parse error.
    pub async fn list_devices(&self) -> Result<Vec<Device>> {
        let buildings: Vec<Building> = self.http.get_json("User/ListDevices", &[]).await?;
        let devices = flatten_devices(buildings);
        tracing::debug!(count = devices.len(), "Listed MELCloud devices");
        Ok(devices)
    }

    /// Reads the current state of a device.
    ///
    /// The returned state starts a fresh edit session: its pending flags are
    /// empty regardless of what the service echoed. The service rate-limits
    /// this endpoint.
    ///
    /// # Errors
    ///
    /// Returns any transport or parse error.
    pub async fn get_device_state(
        &self,
        device_id: i64,
        building_id: i64,
    ) -> Result<AtaDeviceState> {
        tracing::debug!(device_id, building_id, "Fetching device state");

        let mut state: AtaDeviceState = self
            .http
            .get_json(
                "Device/Get",
                &[
                    ("id", device_id.to_string()),
                    ("buildingID", building_id.to_string()),
                ],
            )
            .await?;

        state.set_building_id(building_id);
        state.reset_effective_flags();
        warn_unknown_codes(&state);
        Ok(state)
    }

    /// Writes the pending changes of a state and returns the state the
    /// service echoes back.
    ///
    /// The echoed state carries the service's own flags; call
    /// [`AtaDeviceState::reset_effective_flags`] before editing it again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPendingChanges`](crate::Error::NoPendingChanges)
    /// without contacting the service if no field was set,
    /// [`DeviceError::UnsupportedDeviceType`] for non-ATA units, or any
    /// transport or parse error.
    pub async fn set_device_state(&self, mut state: AtaDeviceState) -> Result<AtaDeviceState> {
        state.mark_pending_command()?;

        let path = match state.device_type() {
            DeviceType::AirToAir => "Device/SetAta",
            other => return Err(DeviceError::UnsupportedDeviceType(other.code()).into()),
        };

        tracing::debug!(
            device_id = state.device_id(),
            flags = state.effective_flags().bits(),
            "Writing device state"
        );

        let mut updated: AtaDeviceState = self.http.post_json(path, &state).await?;
        updated.set_building_id(state.building_id());
        Ok(updated)
    }
}

fn warn_unknown_codes(state: &AtaDeviceState) {
    if state.operation_mode() == OperationMode::Unknown {
        tracing::warn!(
            device_id = state.device_id(),
            code = state.operation_mode_code(),
            "Unknown operation mode code"
        );
    }
    if state.fan_speed() == FanSpeed::Unknown {
        tracing::warn!(
            device_id = state.device_id(),
            code = state.fan_speed_code(),
            "Unknown fan speed code"
        );
    }
    if state.vane_vertical() == VaneVertical::Unknown {
        tracing::warn!(
            device_id = state.device_id(),
            code = state.vane_vertical_code(),
            "Unknown vertical vane code"
        );
    }
    if state.vane_horizontal() == VaneHorizontal::Unknown {
        tracing::warn!(
            device_id = state.device_id(),
            code = state.vane_horizontal_code(),
            "Unknown horizontal vane code"
        );
    }
}
