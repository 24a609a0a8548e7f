// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `MELCloud` Lib - A Rust client for Mitsubishi Electric MELCloud air conditioners.
//!
//! This library reads and writes the state of air-to-air (ATA) units through
//! the MELCloud web service.
//!
//! # Supported Features
//!
//! - **Authentication**: Login with account credentials, or resume a session
//! - **Discovery**: Every device in every building of the account
//! - **State**: Power, operation mode, target temperature, fan speed, vanes
//! - **Writes**: Only the fields changed since the last read are applied
//!
//! # Quick Start
//!
//! ```no_run
//! use melcloud_lib::{Client, Credentials, HttpConfig};
//!
//! #[tokio::main]
//! async fn main() -> melcloud_lib::Result<()> {
//!     let credentials = Credentials::new("me@example.com", "secret");
//!     let client = Client::login(HttpConfig::new(), &credentials).await?;
//!
//!     let devices = client.list_devices().await?;
//!     let Some(device) = devices.first() else {
//!         return Ok(());
//!     };
//!
//!     let mut state = client
//!         .get_device_state(device.device_id, device.building_id)
//!         .await?;
//!
//!     state.set_power(true);
//!     state.set_operation_mode("cool")?;
//!     state.set_target_temperature(device.round_temperature(22.3));
//!
//!     let updated = client.set_device_state(state).await?;
//!     println!("now {} at {}°C", updated.operation_mode(), updated.target_temperature());
//!     Ok(())
//! }
//! ```
//!
//! # Pending changes
//!
//! Every setter on [`AtaDeviceState`] records which field it touched. Writing
//! a state with no recorded change fails with [`Error::NoPendingChanges`]
//! before any request is made.

mod client;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use client::Client;
pub use device::Device;
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{Credentials, HttpConfig};
pub use state::{AtaDeviceState, EffectiveFlags, StateField};
pub use types::{
    DateTimeParseError, DeviceType, FanSpeed, OperationMode, VaneHorizontal, VaneVertical,
};
