//! Labeled point set container

use crate::error::{ensure_same_len, Result};
use crate::point::*;
use ndarray::Array2;
use serde::Serialize;
use std::ops::Index;

/// An ordered set of points with one label (or color value) per point
///
/// The two sequences are parallel-indexed and always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset<P, L> {
    points: Vec<P>,
    labels: Vec<L>,
}

/// 2D points with integer class labels
pub type LabeledPoints2 = Dataset<Point2d, usize>;

/// 3D points with integer class labels
pub type LabeledPoints3 = Dataset<Point3d, usize>;

/// 3D points with a continuous color value in `[0, 1]`
pub type GradientPoints3 = Dataset<Point3d, f64>;

impl<P, L> Dataset<P, L> {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Create an empty dataset with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Build a dataset from parallel point and label vectors
    pub fn from_parts(points: Vec<P>, labels: Vec<L>) -> Result<Self> {
        ensure_same_len("labels", points.len(), labels.len())?;
        Ok(Self { points, labels })
    }

    /// Get the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add one labeled point
    pub fn push(&mut self, point: P, label: L) {
        self.points.push(point);
        self.labels.push(label);
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Get an iterator over `(point, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&P, &L)> + '_ {
        self.points.iter().zip(self.labels.iter())
    }

    /// Split into the point and label vectors
    pub fn into_parts(self) -> (Vec<P>, Vec<L>) {
        (self.points, self.labels)
    }
}

impl<P: Coordinates, L> Dataset<P, L> {
    /// Copy the points into an `[N, DIM]` array
    pub fn to_array(&self) -> Array2<f64> {
        let mut array = Array2::zeros((self.points.len(), P::DIM));
        for (point, mut row) in self.points.iter().zip(array.rows_mut()) {
            let mut coords = [0.0; 3];
            point.write_coords(&mut coords[..P::DIM]);
            for (dst, src) in row.iter_mut().zip(coords.iter()) {
                *dst = *src;
            }
        }
        array
    }
}

impl<L: Clone> Dataset<Point2d, L> {
    /// Embed the dataset in the plane `z = const` so it can be drawn in 3D
    pub fn lift_to_3d(&self, z: f64) -> Dataset<Point3d, L> {
        Dataset {
            points: self.points.iter().map(|p| lift_point(p, z)).collect(),
            labels: self.labels.clone(),
        }
    }
}

impl<P, L> Default for Dataset<P, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, L> Index<usize> for Dataset<P, L> {
    type Output = P;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<P, L> Extend<(P, L)> for Dataset<P, L> {
    fn extend<I: IntoIterator<Item = (P, L)>>(&mut self, iter: I) {
        for (point, label) in iter {
            self.push(point, label);
        }
    }
}

impl<P, L> FromIterator<(P, L)> for Dataset<P, L> {
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        let (points, labels) = iter.into_iter().unzip();
        Self { points, labels }
    }
}

impl<P, L> IntoIterator for Dataset<P, L> {
    type Item = (P, L);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<P>, std::vec::IntoIter<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter().zip(self.labels)
    }
}
