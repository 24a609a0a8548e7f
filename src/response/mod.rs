// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for MELCloud JSON envelopes.
//!
//! Device state responses decode straight into
//! [`AtaDeviceState`](crate::state::AtaDeviceState); this module holds the
//! remaining envelopes: login and the building tree returned by
//! `User/ListDevices`.

use serde::{Deserialize, Deserializer};

mod login;
mod structure;

pub use login::{LoginData, LoginRequest, LoginResponse};
pub use structure::{Area, Building, Floor, Structure, flatten_devices};

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
