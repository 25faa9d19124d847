/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use euclid::default::{RigidTransform3D, Transform3D};
use webxr_test_fixtures::FLOAT_EPSILON;

pub fn assert_approx(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= FLOAT_EPSILON,
        "{} differs from {} by more than {}",
        actual,
        expected,
        FLOAT_EPSILON
    );
}

pub fn assert_matrix_approx_eq(actual: &Transform3D<f32>, expected: &Transform3D<f32>) {
    for (actual, expected) in actual.to_array().iter().zip(expected.to_array()) {
        assert_approx(*actual, expected);
    }
}

pub fn assert_transform_approx_eq(actual: &RigidTransform3D<f32>, expected: &RigidTransform3D<f32>) {
    assert_approx(actual.translation.x, expected.translation.x);
    assert_approx(actual.translation.y, expected.translation.y);
    assert_approx(actual.translation.z, expected.translation.z);

    // q and -q encode the same rotation
    let dot = actual.rotation.i * expected.rotation.i +
        actual.rotation.j * expected.rotation.j +
        actual.rotation.k * expected.rotation.k +
        actual.rotation.r * expected.rotation.r;
    let sign = if dot < 0. { -1. } else { 1. };
    assert_approx(actual.rotation.i, sign * expected.rotation.i);
    assert_approx(actual.rotation.j, sign * expected.rotation.j);
    assert_approx(actual.rotation.k, sign * expected.rotation.k);
    assert_approx(actual.rotation.r, sign * expected.rotation.r);
}
