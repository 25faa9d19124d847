/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};

/// Errors produced when decomposing a fixture matrix into a pose.

#[derive(Debug, Serialize, Deserialize)]
pub enum Error {
    NotAffine,
    NotRigid,
}
