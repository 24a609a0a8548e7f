// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building tree returned by `User/ListDevices`.
//!
//! Devices can hang directly off a building's structure, off an area, off a
//! floor, or off an area within a floor. The same unit may appear in more
//! than one place.

use std::collections::HashSet;

use serde::Deserialize;

use crate::device::Device;

use super::null_as_default;

/// A building and its device tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Building {
    /// Devices, areas and floors of the building.
    #[serde(deserialize_with = "null_as_default")]
    pub structure: Structure,
}

/// Top level of a building's device tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Structure {
    /// Devices attached to the building itself.
    #[serde(deserialize_with = "null_as_default")]
    pub devices: Vec<Device>,
    /// Areas attached to the building.
    #[serde(deserialize_with = "null_as_default")]
    pub areas: Vec<Area>,
    /// Floors of the building.
    #[serde(deserialize_with = "null_as_default")]
    pub floors: Vec<Floor>,
}

/// An area (room group).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Area {
    /// Devices in the area.
    #[serde(deserialize_with = "null_as_default")]
    pub devices: Vec<Device>,
}

/// A floor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Floor {
    /// Devices attached to the floor itself.
    #[serde(deserialize_with = "null_as_default")]
    pub devices: Vec<Device>,
    /// Areas on the floor.
    #[serde(deserialize_with = "null_as_default")]
    pub areas: Vec<Area>,
}

/// Flattens building trees into a device list.
///
/// Order per building: structure devices, structure areas, floor devices,
/// floor areas. A device id seen before is skipped.
#[must_use]
pub fn flatten_devices(buildings: Vec<Building>) -> Vec<Device> {
    let mut seen = HashSet::new();
    let mut devices = Vec::new();

    for building in buildings {
        let Structure {
            devices: direct,
            areas,
            floors,
        } = building.structure;

        let nested = direct
            .into_iter()
            .chain(areas.into_iter().flat_map(|area| area.devices))
            .chain(floors.into_iter().flat_map(|floor| {
                floor
                    .devices
                    .into_iter()
                    .chain(floor.areas.into_iter().flat_map(|area| area.devices))
            }));

        devices.extend(nested.filter(|device| seen.insert(device.device_id)));
    }

    devices
}
