//! Core traits for vectorviz

use crate::{dataset::Dataset, point::*};

/// Trait for objects with an axis-aligned extent
pub trait Bounded {
    /// Get the bounding box of the object as `(min, max)`
    fn bounding_box(&self) -> (Point3d, Point3d);

    /// Get the center point of the object
    fn center(&self) -> Point3d {
        let (min, max) = self.bounding_box();
        Point3d::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        )
    }
}

impl Bounded for [Point3d] {
    fn bounding_box(&self) -> (Point3d, Point3d) {
        let Some(first) = self.first() else {
            return (Point3d::origin(), Point3d::origin());
        };

        let mut min = *first;
        let mut max = *first;

        for p in self {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        (min, max)
    }
}

impl<L> Bounded for Dataset<Point3d, L> {
    fn bounding_box(&self) -> (Point3d, Point3d) {
        self.points().bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bounding_box_is_origin() {
        let points: Vec<Point3d> = Vec::new();
        let (min, max) = points.as_slice().bounding_box();
        assert_eq!(min, Point3d::origin());
        assert_eq!(max, Point3d::origin());
    }

    #[test]
    fn test_bounding_box_and_center() {
        let data = Dataset::from_parts(
            vec![Point3d::new(-1.0, 0.0, 2.0), Point3d::new(3.0, 4.0, -2.0)],
            vec![0.0, 1.0],
        )
        .unwrap();

        let (min, max) = data.bounding_box();
        assert_eq!(min, Point3d::new(-1.0, 0.0, -2.0));
        assert_eq!(max, Point3d::new(3.0, 4.0, 2.0));
        assert_eq!(data.center(), Point3d::new(1.0, 2.0, 0.0));
    }
}
