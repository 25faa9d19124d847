/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use euclid::default::{RigidTransform3D, Rotation3D, Transform3D, Vector3D};

use crate::Error;
use crate::FLOAT_EPSILON;

/// Lift a raw fixture array into a matrix.
///
/// The arrays use WebGL (column-major) element order, which matches
/// euclid's storage order: the translation lands in m41..m43.
pub fn from_column_major(m: &[f32; 16]) -> Transform3D<f32> {
    Transform3D::new(
        m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8], m[9], m[10], m[11], m[12], m[13],
        m[14], m[15],
    )
}

/// Decompose an affine rigid matrix into a translation and unit quaternion.
///
/// Matrices with a projective component (such as `VALID_PROJECTION_MATRIX`)
/// are rejected with `Error::NotAffine`; matrices whose upper 3x3 is not a
/// proper rotation (scales, shears, reflections) with `Error::NotRigid`.
pub fn decompose(m: &Transform3D<f32>) -> Result<RigidTransform3D<f32>, Error> {
    if m.m14.abs() > FLOAT_EPSILON ||
        m.m24.abs() > FLOAT_EPSILON ||
        m.m34.abs() > FLOAT_EPSILON ||
        (m.m44 - 1.).abs() > FLOAT_EPSILON
    {
        return Err(Error::NotAffine);
    }

    // In euclid's row-vector convention each row of the upper 3x3 is the
    // image of one basis axis, so rigidity means the rows form a
    // right-handed orthonormal basis.
    let rx = Vector3D::new(m.m11, m.m12, m.m13);
    let ry = Vector3D::new(m.m21, m.m22, m.m23);
    let rz = Vector3D::new(m.m31, m.m32, m.m33);
    for row in [rx, ry, rz] {
        if (row.length() - 1.).abs() > FLOAT_EPSILON {
            return Err(Error::NotRigid);
        }
    }
    if rx.dot(ry).abs() > FLOAT_EPSILON ||
        ry.dot(rz).abs() > FLOAT_EPSILON ||
        rz.dot(rx).abs() > FLOAT_EPSILON ||
        rx.cross(ry).dot(rz) < 0.
    {
        return Err(Error::NotRigid);
    }

    // Trace method, with the index formulas transposed for euclid's field
    // convention (checked against the VALID_POSE pair: this must recover
    // the quaternion (0.5, 0.5, 0.5, 0.5)).
    let trace = m.m11 + m.m22 + m.m33;
    let (x, y, z, w) = if trace > 0. {
        let s = 2. * (1. + trace).sqrt();
        (
            (m.m23 - m.m32) / s,
            (m.m31 - m.m13) / s,
            (m.m12 - m.m21) / s,
            0.25 * s,
        )
    } else if m.m11 > m.m22 && m.m11 > m.m33 {
        let s = 2. * (1. + m.m11 - m.m22 - m.m33).sqrt();
        (
            0.25 * s,
            (m.m12 + m.m21) / s,
            (m.m31 + m.m13) / s,
            (m.m23 - m.m32) / s,
        )
    } else if m.m22 > m.m33 {
        let s = 2. * (1. + m.m22 - m.m11 - m.m33).sqrt();
        (
            (m.m12 + m.m21) / s,
            0.25 * s,
            (m.m23 + m.m32) / s,
            (m.m31 - m.m13) / s,
        )
    } else {
        let s = 2. * (1. + m.m33 - m.m11 - m.m22).sqrt();
        (
            (m.m31 + m.m13) / s,
            (m.m23 + m.m32) / s,
            0.25 * s,
            (m.m12 - m.m21) / s,
        )
    };

    Ok(RigidTransform3D::new(
        Rotation3D::quaternion(x, y, z, w),
        Vector3D::new(m.m41, m.m42, m.m43),
    ))
}
