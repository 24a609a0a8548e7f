// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for MELCloud device state.
//!
//! Each enumerated field of an air-to-air unit has a typed representation
//! with two mapping directions:
//!
//! - **Decode** (`from_code`): integer code → variant. Total: codes the
//!   library does not know become an `Unknown` variant labelled
//!   `"unknown"`, so a read never fails on an unfamiliar value.
//! - **Encode** ([`FromStr`](std::str::FromStr)): label → variant. Strict:
//!   unrecognized labels fail with
//!   [`ValueError::InvalidValue`](crate::error::ValueError::InvalidValue).
//!
//! # Types
//!
//! - [`OperationMode`] - heat / dry / cool / fan only / auto
//! - [`FanSpeed`] - auto or a positive speed step
//! - [`VaneVertical`] - auto, positions 1-5, swing
//! - [`VaneHorizontal`] - auto, positions 1-5, split, swing
//! - [`DeviceType`] - product line of a unit

mod datetime;
mod device_type;
mod fan_speed;
mod mode;
mod vane;

pub use datetime::{DateTimeParseError, parse_timestamp};
pub use device_type::DeviceType;
pub use fan_speed::FanSpeed;
pub use mode::OperationMode;
pub use vane::{VaneHorizontal, VaneVertical};

/// Label returned when decoding a code with no known meaning.
pub const UNKNOWN_LABEL: &str = "unknown";
