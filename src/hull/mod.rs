//! Convex hull of a point set.
//!
//! # Example
//!
//! ```
//! use edgegroup::hull::convex_hull;
//! use edgegroup::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! assert_eq!(convex_hull(&points).len(), 4);
//! ```

use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull using Andrew's monotone chain algorithm.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// lowest-x (then lowest-y) point. The hull is implicitly closed. Collinear
/// boundary points are dropped, so collinear input collapses to its two
/// endpoints. Inputs of one or two points are returned as-is.
///
/// Time O(n log n), space O(n).
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    let mut lower = half_hull(sorted.iter().copied());
    let mut upper = half_hull(sorted.iter().rev().copied());

    // Each chain ends where the other starts
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Builds one monotone chain, keeping only strict left turns.
fn half_hull<F: Float>(points: impl Iterator<Item = Point2<F>>) -> Vec<Point2<F>> {
    let mut chain: Vec<Point2<F>> = Vec::new();
    for p in points {
        while chain.len() >= 2
            && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= F::zero()
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Cross product of OA and OB. Positive for a counter-clockwise turn.
#[inline]
fn cross<F: Float>(o: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    (a - o).cross(b - o)
}
