/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Fixture values shared by WebXR conformance tests: the float comparison
//! tolerance, pose constants in both their matrix and rigid-transform
//! encodings, and descriptors for the simulated devices the tests connect.
//!
//! Everything here is an immutable static; tests that need a variant of a
//! fixture clone it and modify the copy.

mod constants;
mod error;
mod mock;
mod util;

pub use crate::constants::*;
pub use crate::error::Error;
pub use crate::mock::{BoundsPoint, DeviceInit, Eye, ViewInit};
pub use crate::util::{decompose, from_column_major};
