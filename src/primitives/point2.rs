//! 2D point type for positions.
//!
//! Contours coming out of an edge extractor are integer pixel positions
//! (`Point2<i32>`); bounding geometry is computed in floating point
//! (`Point2<f64>`). The float-only helpers live behind a `Float` bound.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point.
///
/// Generic over the coordinate type: integer pixel coordinates for contour
/// input, `f32`/`f64` for derived geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<F: Float> Point2<F> {
    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Returns the Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        (other - self).magnitude()
    }
}

impl<T> From<(T, T)> for Point2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl From<Point2<i32>> for Point2<f64> {
    #[inline]
    fn from(p: Point2<i32>) -> Self {
        Self {
            x: f64::from(p.x),
            y: f64::from(p.y),
        }
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}
