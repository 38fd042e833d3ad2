//! Scene camera for 3D scatter plots

use nalgebra::{Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};
use vectorviz_core::Point3d;

/// A 3D coordinate as the renderer expects it (`{"x":..,"y":..,"z":..}`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Point3d> for Xyz {
    fn from(p: Point3d) -> Self {
        Self { x: p.x, y: p.y, z: p.z }
    }
}

impl From<Vector3<f64>> for Xyz {
    fn from(v: Vector3<f64>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

/// Camera placement in the scene's normalized coordinates
///
/// `eye` is where the camera sits, `center` is the point it looks at and
/// `up` is the screen-up direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Point3d,
    pub center: Point3d,
    pub up: Vector3<f64>,
}

impl Camera {
    /// Create a new camera
    pub fn new(eye: Point3d, center: Point3d, up: Vector3<f64>) -> Self {
        Self { eye, center, up }
    }

    /// Distance between the eye and the center
    pub fn distance(&self) -> f64 {
        (self.eye - self.center).norm()
    }

    /// Move the eye toward (factor < 1) or away from (factor > 1) the center
    pub fn zoom(&mut self, factor: f64) {
        let offset = self.eye - self.center;
        self.eye = self.center + offset * factor;
    }

    /// Rotate the camera around the center
    ///
    /// `horizontal` turns around the up axis, `vertical` tilts toward or away
    /// from it. Both are in radians.
    pub fn orbit(&mut self, horizontal: f64, vertical: f64) {
        let up = Unit::new_normalize(self.up);
        let mut offset = Rotation3::from_axis_angle(&up, horizontal) * (self.eye - self.center);

        let side = offset.cross(&up);
        if let Some(axis) = Unit::try_new(side, 1e-12) {
            offset = Rotation3::from_axis_angle(&axis, vertical) * offset;
        }
        self.eye = self.center + offset;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3d::new(1.25, 1.25, 1.25),
            Point3d::origin(),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }
}

#[derive(Serialize)]
struct CameraRepr {
    eye: Xyz,
    center: Xyz,
    up: Xyz,
}

impl Serialize for Camera {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CameraRepr {
            eye: self.eye.into(),
            center: self.center.into(),
            up: self.up.into(),
        }
        .serialize(serializer)
    }
}
