// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for the MELCloud web API.
//!
//! - [`HttpConfig`]: base URL, timeout and client identification
//! - [`Credentials`]: account login, optionally read from the environment
//! - [`HttpClient`]: JSON request/response transport
//!
//! Each call is a single round trip. Nothing is retried or cached.

mod http;

pub use http::{CONTEXT_KEY_HEADER, Credentials, HttpClient, HttpConfig};
