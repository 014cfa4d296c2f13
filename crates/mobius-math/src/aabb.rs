use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Box enclosing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        points.into_iter().fold(None, |acc, p| match acc {
            None => Some(Self::new(p, p)),
            Some(b) => Some(Self::new(b.min.min(p), b.max.max(p))),
        })
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn diagonal(&self) -> f64 {
        self.extents().length()
    }
}
