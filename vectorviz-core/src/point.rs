//! Point types and related functionality

use nalgebra::{Point2, Point3};

/// A 2D point with double precision coordinates
pub type Point2d = Point2<f64>;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// Points that can be flattened into a fixed number of coordinates
pub trait Coordinates: Copy {
    /// Number of coordinates per point
    const DIM: usize;

    /// Write the coordinates into `out`, which has exactly `DIM` slots
    fn write_coords(&self, out: &mut [f64]);
}

impl Coordinates for Point2d {
    const DIM: usize = 2;

    fn write_coords(&self, out: &mut [f64]) {
        out[0] = self.x;
        out[1] = self.y;
    }
}

impl Coordinates for Point3d {
    const DIM: usize = 3;

    fn write_coords(&self, out: &mut [f64]) {
        out[0] = self.x;
        out[1] = self.y;
        out[2] = self.z;
    }
}

/// Embed a 2D point in the plane `z = const`
pub fn lift_point(point: &Point2d, z: f64) -> Point3d {
    Point3d::new(point.x, point.y, z)
}
