//! Axis-aligned bounding box.

use crate::primitives::Point2;
use std::ops::Sub;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. Groups keep theirs in integer
/// pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2<T> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<T>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<T>,
}

impl<T: Copy + PartialOrd> Aabb2<T> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<T>, max: Point2<T>) -> Self {
        Self { min, max }
    }

    /// Returns a new AABB widened by `p` with at most one bound moved per axis.
    ///
    /// On each axis a coordinate below `min` lowers `min`; only otherwise is a
    /// coordinate above `max` allowed to raise `max`. A box seeded with
    /// `min > max` can therefore stay inverted after a single point.
    #[inline]
    pub fn expand_exclusive(self, p: Point2<T>) -> Self {
        let mut out = self;

        if p.x < out.min.x {
            out.min.x = p.x;
        } else if p.x > out.max.x {
            out.max.x = p.x;
        }

        if p.y < out.min.y {
            out.min.y = p.y;
        } else if p.y > out.max.y {
            out.max.y = p.y;
        }

        out
    }

    /// Returns `true` if `min <= max` on both axes.
    #[inline]
    pub fn is_ordered(self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Returns `true` if this AABB contains the given point (boundary included).
    #[inline]
    pub fn contains_point(self, p: Point2<T>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if `other` lies entirely inside this AABB.
    ///
    /// Compares corners only, so it is well defined for inverted boxes too.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Returns `true` if this AABB intersects another AABB.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns the outline as a closed polygon:
    /// `min`, `(min.x, max.y)`, `max`, `(max.x, min.y)`.
    #[inline]
    pub fn corners(self) -> [Point2<T>; 4] {
        [
            self.min,
            Point2::new(self.min.x, self.max.y),
            self.max,
            Point2::new(self.max.x, self.min.y),
        ]
    }
}

impl<T: Copy + Sub<Output = T>> Aabb2<T> {
    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> T {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> T {
        self.max.y - self.min.y
    }
}
