// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state and pending-change tracking.
//!
//! [`AtaDeviceState`] is read from the service, edited locally through its
//! setters, and written back. Each setter records its field in
//! [`EffectiveFlags`], which the service uses to decide what to apply.
//!
//! # Examples
//!
//! ```
//! use melcloud_lib::state::{AtaDeviceState, StateField};
//!
//! let mut state = AtaDeviceState::new(1234, 56);
//! state.set_power(true);
//! state.set_fan_speed("auto").unwrap();
//!
//! let flags = state.effective_flags();
//! assert!(flags.contains(StateField::Power));
//! assert!(flags.contains(StateField::FanSpeed));
//! assert!(!flags.contains(StateField::OperationMode));
//! ```

mod device_state;
mod effective_flags;

pub use device_state::AtaDeviceState;
pub use effective_flags::{EffectiveFlags, StateField};
