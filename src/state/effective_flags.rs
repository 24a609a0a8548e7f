// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pending-change tracking for state writes.
//!
//! A write to MELCloud carries an `EffectiveFlags` bitmask telling the
//! service which fields of the payload to apply. Everything else in the
//! payload is ignored. [`StateField`] names the writable fields and
//! [`EffectiveFlags`] accumulates them; the integer form only appears on
//! the wire.

use serde::{Deserialize, Serialize};

/// A writable field of an air-to-air unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    /// `Power`.
    Power,
    /// `OperationMode`.
    OperationMode,
    /// `SetTemperature`.
    TargetTemperature,
    /// `SetFanSpeed`.
    FanSpeed,
    /// `VaneVertical`.
    VaneVertical,
    /// `VaneHorizontal`.
    VaneHorizontal,
}

impl StateField {
    /// All writable fields, in bit order.
    pub const ALL: [Self; 6] = [
        Self::Power,
        Self::OperationMode,
        Self::TargetTemperature,
        Self::FanSpeed,
        Self::VaneVertical,
        Self::VaneHorizontal,
    ];

    /// Returns the bit this field occupies in `EffectiveFlags`.
    ///
    /// The horizontal vane bit is `0x100`, not `0x20`.
    #[must_use]
    pub const fn bit(&self) -> u32 {
        match self {
            Self::Power => 0x01,
            Self::OperationMode => 0x02,
            Self::TargetTemperature => 0x04,
            Self::FanSpeed => 0x08,
            Self::VaneVertical => 0x10,
            Self::VaneHorizontal => 0x100,
        }
    }
}

/// Set of fields pending for the next write.
///
/// Bits are only ever added; [`clear`](Self::clear) resets the whole set when
/// a new edit session starts.
///
/// # Examples
///
/// ```
/// use melcloud_lib::state::{EffectiveFlags, StateField};
///
/// let mut flags = EffectiveFlags::new();
/// assert!(flags.is_empty());
///
/// flags.set(StateField::OperationMode);
/// flags.set(StateField::TargetTemperature);
/// assert_eq!(flags.bits(), 0x06);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectiveFlags(u32);

impl EffectiveFlags {
    /// Creates an empty flag set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a flag set from raw bits as sent by the service.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Marks a field as pending.
    pub fn set(&mut self, field: StateField) {
        self.0 |= field.bit();
    }

    /// Clears every pending field.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Returns `true` if no field is pending.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the field is pending.
    #[must_use]
    pub const fn contains(&self, field: StateField) -> bool {
        self.0 & field.bit() != 0
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Iterates over the pending fields in bit order.
    ///
    /// Bits that do not correspond to a [`StateField`] are skipped.
    pub fn fields(&self) -> impl Iterator<Item = StateField> + '_ {
        StateField::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
    }
}

impl FromIterator<StateField> for EffectiveFlags {
    fn from_iter<I: IntoIterator<Item = StateField>>(iter: I) -> Self {
        let mut flags = Self::new();
        for field in iter {
            flags.set(field);
        }
        flags
    }
}
