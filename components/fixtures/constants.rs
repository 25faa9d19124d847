/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::sync::LazyLock;

use euclid::default::{RigidTransform3D, Rotation3D, Size2D, Vector3D};

use crate::mock::{BoundsPoint, DeviceInit, Eye, ViewInit};
use crate::util::from_column_major;

/// Exact equality on floats falls over on precision errors, so pose and
/// matrix assertions compare approximately with this tolerance.
pub const FLOAT_EPSILON: f32 = 0.001;

pub const IDENTITY_MATRIX: [f32; 16] = [
    1., 0., 0., 0., //
    0., 1., 0., 0., //
    0., 0., 1., 0., //
    0., 0., 0., 1.,
];

pub static IDENTITY_TRANSFORM: LazyLock<RigidTransform3D<f32>> =
    LazyLock::new(RigidTransform3D::identity);

/// A valid pose for when the specific values don't matter. The matrix and
/// the transform encode the same rigid transform: translation (1, 1, 1)
/// and a 120 degree rotation about the axis (1, 1, 1)/sqrt(3).
pub const VALID_POSE_MATRIX: [f32; 16] = [
    0., 1., 0., 0., //
    0., 0., 1., 0., //
    1., 0., 0., 0., //
    1., 1., 1., 1.,
];

pub static VALID_POSE_TRANSFORM: LazyLock<RigidTransform3D<f32>> = LazyLock::new(|| {
    RigidTransform3D::new(
        Rotation3D::quaternion(0.5, 0.5, 0.5, 0.5),
        Vector3D::new(1., 1., 1.),
    )
});

/// A generic projective matrix for wherever some valid projection is
/// needed. It is deliberately not affine and cannot be decomposed into a
/// pose.
pub const VALID_PROJECTION_MATRIX: [f32; 16] = [
    1., 0., 0., 0., //
    0., 1., 0., 0., //
    3., 2., -1., -1., //
    0., 0., -0.2, 0.,
];

/// A valid controller grip pose for when the specific values don't matter.
pub const VALID_GRIP: [f32; 16] = [
    1., 0., 0., 0., //
    0., 1., 0., 0., //
    0., 0., 1., 0., //
    4., 3., 2., 1.,
];

/// A valid grip-to-pointer offset for when the specific values don't
/// matter.
pub const VALID_POINTER_OFFSET: [f32; 16] = [
    1., 0., 0., 0., //
    0., 1., 0., 0., //
    0., 0., 1., 0., //
    0., 0., 1., 1.,
];

/// `VALID_POINTER_OFFSET` applied in `VALID_GRIP`'s frame. Both rotations
/// are identity, so the translations combine to (4, 3, 3).
pub const VALID_GRIP_WITH_POINTER_OFFSET: [f32; 16] = [
    1., 0., 0., 0., //
    0., 1., 0., 0., //
    0., 0., 1., 0., //
    4., 3., 3., 1.,
];

/// A valid local-to-floor transform in both encodings: translation
/// (1, 1.65, -1) with identity rotation.
pub const VALID_LOCAL_TO_FLOOR_MATRIX: [f32; 16] = [
    1., 0., 0., 0., //
    0., 1., 0., 0., //
    0., 0., 1., 0., //
    1., 1.65, -1., 1.,
];

pub static VALID_LOCAL_TO_FLOOR_TRANSFORM: LazyLock<RigidTransform3D<f32>> = LazyLock::new(|| {
    RigidTransform3D::new(Rotation3D::identity(), Vector3D::new(1., 1.65, -1.))
});

/// A six-vertex stage boundary, roughly centred on the origin in the floor
/// (x/z) plane.
pub static VALID_BOUNDS: LazyLock<Vec<BoundsPoint>> = LazyLock::new(|| {
    vec![
        BoundsPoint { x: 3.0, z: -2.0 },
        BoundsPoint { x: 3.5, z: 0.0 },
        BoundsPoint { x: 3.0, z: 2.0 },
        BoundsPoint { x: -3.0, z: 2.0 },
        BoundsPoint { x: -3.5, z: 0.0 },
        BoundsPoint { x: -3.0, z: -2.0 },
    ]
});

pub static VALID_RESOLUTION: LazyLock<Size2D<i32>> = LazyLock::new(|| Size2D::new(20, 20));

pub static LEFT_OFFSET: LazyLock<RigidTransform3D<f32>> = LazyLock::new(|| {
    RigidTransform3D::new(Rotation3D::identity(), Vector3D::new(-0.1, 0., 0.))
});

pub static RIGHT_OFFSET: LazyLock<RigidTransform3D<f32>> = LazyLock::new(|| {
    RigidTransform3D::new(Rotation3D::identity(), Vector3D::new(0.1, 0., 0.))
});

/// The two views of a simulated stereo headset: shared projection and
/// resolution, eye offsets mirrored about the viewer on the x axis.
pub static VALID_VIEWS: LazyLock<Vec<ViewInit>> = LazyLock::new(|| {
    vec![
        ViewInit {
            eye: Eye::Left,
            projection: from_column_major(&VALID_PROJECTION_MATRIX),
            view_offset: LEFT_OFFSET.clone(),
            resolution: *VALID_RESOLUTION,
        },
        ViewInit {
            eye: Eye::Right,
            projection: from_column_major(&VALID_PROJECTION_MATRIX),
            view_offset: RIGHT_OFFSET.clone(),
            resolution: *VALID_RESOLUTION,
        },
    ]
});

/// The single view of a monoscopic, non-immersive display.
pub static NON_IMMERSIVE_VIEWS: LazyLock<Vec<ViewInit>> = LazyLock::new(|| {
    vec![ViewInit {
        eye: Eye::None,
        projection: from_column_major(&VALID_PROJECTION_MATRIX),
        view_offset: IDENTITY_TRANSFORM.clone(),
        resolution: *VALID_RESOLUTION,
    }]
});

/// A fully tracked immersive device, viewer at the origin.
pub static TRACKED_IMMERSIVE_DEVICE: LazyLock<DeviceInit> = LazyLock::new(|| DeviceInit {
    supports_immersive: true,
    views: VALID_VIEWS.clone(),
    viewer_origin: IDENTITY_TRANSFORM.clone(),
});

/// A non-immersive device with a single untracked view.
pub static VALID_NON_IMMERSIVE_DEVICE: LazyLock<DeviceInit> = LazyLock::new(|| DeviceInit {
    supports_immersive: false,
    views: NON_IMMERSIVE_VIEWS.clone(),
    viewer_origin: IDENTITY_TRANSFORM.clone(),
});
