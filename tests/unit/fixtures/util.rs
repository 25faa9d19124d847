/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use euclid::Angle;
use euclid::default::{RigidTransform3D, Rotation3D, Transform3D, Vector3D};
use webxr_test_fixtures::{Error, VALID_GRIP, decompose, from_column_major};

use crate::common::assert_transform_approx_eq;

#[test]
fn translation_lands_in_the_fourth_row() {
    let m = from_column_major(&VALID_GRIP);
    assert_eq!((m.m41, m.m42, m.m43, m.m44), (4., 3., 2., 1.));
}

#[test]
fn scales_and_reflections_are_not_rigid() {
    assert!(matches!(
        decompose(&Transform3D::scale(2., 2., 2.)),
        Err(Error::NotRigid)
    ));
    assert!(matches!(
        decompose(&Transform3D::scale(-1., 1., 1.)),
        Err(Error::NotRigid)
    ));
}

#[test]
fn decompose_inverts_rigid_to_transform() {
    // The 170 degree rotations push the matrix trace negative, hitting one
    // quaternion extraction branch per axis; the shallow rotation stays in
    // the trace-positive branch.
    let cases = [
        (Vector3D::new(1., 0., 0.), 170.),
        (Vector3D::new(0., 1., 0.), 170.),
        (Vector3D::new(0., 0., 1.), 170.),
        (Vector3D::new(1., 1., 1.), 30.),
    ];
    for (axis, degrees) in cases {
        let transform = RigidTransform3D::new(
            Rotation3D::around_axis(axis.normalize(), Angle::degrees(degrees)),
            Vector3D::new(1., -2., 0.5),
        );
        let decomposed = decompose(&transform.to_transform())
            .expect("a rigid transform's matrix must decompose");
        assert_transform_approx_eq(&decomposed, &transform);
    }
}
