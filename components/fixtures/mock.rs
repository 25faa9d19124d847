/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use euclid::default::{RigidTransform3D, Size2D, Transform3D};

/// Which eye a view renders for.
/// <https://www.w3.org/TR/webxr/#xreye-enum>
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ipc", derive(serde::Serialize, serde::Deserialize))]
pub enum Eye {
    Left,
    Right,
    None,
}

/// A single view of a simulated device.
///
/// The projection matrix is projective, not affine; the view offset is the
/// rigid transform from the viewer to this view's eye.
#[derive(Clone, Debug)]
pub struct ViewInit {
    pub eye: Eye,
    pub projection: Transform3D<f32>,
    pub view_offset: RigidTransform3D<f32>,
    /// Output resolution in pixels.
    pub resolution: Size2D<i32>,
}

/// A simulated device: two views for a stereo immersive device, one view
/// for a monoscopic non-immersive one.
#[derive(Clone, Debug)]
pub struct DeviceInit {
    pub supports_immersive: bool,
    pub views: Vec<ViewInit>,
    pub viewer_origin: RigidTransform3D<f32>,
}

/// A vertex of the floor-space bounds polygon, in the x/z (floor) plane.
/// Order is significant: the vertices wind around the stage boundary.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "ipc", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundsPoint {
    pub x: f32,
    pub z: f32,
}

#[cfg(feature = "ipc")]
mod ipc {
    use euclid::default::{RigidTransform3D, Rotation3D, Size2D, Vector3D};
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{DeviceInit, Eye, ViewInit};
    use crate::util::from_column_major;

    // euclid's serde derives place bounds on the phantom unit parameters,
    // which the untyped `UnknownUnit` does not implement, so poses and
    // matrices cross the ipc boundary as plain component arrays.

    #[derive(Deserialize, Serialize)]
    struct Pose {
        rotation: [f32; 4],
        translation: [f32; 3],
    }

    impl From<&RigidTransform3D<f32>> for Pose {
        fn from(transform: &RigidTransform3D<f32>) -> Pose {
            let rotation = &transform.rotation;
            Pose {
                rotation: [rotation.i, rotation.j, rotation.k, rotation.r],
                translation: transform.translation.to_array(),
            }
        }
    }

    impl From<Pose> for RigidTransform3D<f32> {
        fn from(pose: Pose) -> RigidTransform3D<f32> {
            let [i, j, k, r] = pose.rotation;
            let [x, y, z] = pose.translation;
            RigidTransform3D::new(Rotation3D::quaternion(i, j, k, r), Vector3D::new(x, y, z))
        }
    }

    #[derive(Deserialize, Serialize)]
    struct View {
        eye: Eye,
        projection: [f32; 16],
        view_offset: Pose,
        resolution: [i32; 2],
    }

    impl Serialize for ViewInit {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            View {
                eye: self.eye,
                projection: self.projection.to_array(),
                view_offset: Pose::from(&self.view_offset),
                resolution: [self.resolution.width, self.resolution.height],
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for ViewInit {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<ViewInit, D::Error> {
            let view = View::deserialize(deserializer)?;
            Ok(ViewInit {
                eye: view.eye,
                projection: from_column_major(&view.projection),
                view_offset: view.view_offset.into(),
                resolution: Size2D::new(view.resolution[0], view.resolution[1]),
            })
        }
    }

    impl Serialize for DeviceInit {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut device = serializer.serialize_struct("DeviceInit", 3)?;
            device.serialize_field("supports_immersive", &self.supports_immersive)?;
            device.serialize_field("views", &self.views)?;
            device.serialize_field("viewer_origin", &Pose::from(&self.viewer_origin))?;
            device.end()
        }
    }

    #[derive(Deserialize)]
    struct Device {
        supports_immersive: bool,
        views: Vec<ViewInit>,
        viewer_origin: Pose,
    }

    impl<'de> Deserialize<'de> for DeviceInit {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DeviceInit, D::Error> {
            let device = Device::deserialize(deserializer)?;
            Ok(DeviceInit {
                supports_immersive: device.supports_immersive,
                views: device.views,
                viewer_origin: device.viewer_origin.into(),
            })
        }
    }
}
