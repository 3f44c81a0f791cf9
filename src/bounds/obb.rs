//! Oriented bounding box.
//!
//! The minimum-area rectangle is found with rotating calipers over the convex
//! hull: an optimal rectangle always has one side collinear with a hull edge,
//! so it is enough to try the orientation of every hull edge.
//!
//! # Example
//!
//! ```
//! use edgegroup::bounds::minimum_area_rectangle;
//! use edgegroup::Point2;
//!
//! // A rotated rectangle's vertices
//! let points = vec![
//!     Point2::new(1.0_f64, 0.0),
//!     Point2::new(3.0, 1.0),
//!     Point2::new(2.0, 3.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let obb = minimum_area_rectangle(&points).unwrap();
//! assert!((obb.area() - 5.0).abs() < 1e-9);
//! ```

use crate::hull::convex_hull;
use crate::primitives::{Point2, Vec2};
use num_traits::{Float, FloatConst};

/// A 2D oriented bounding box.
///
/// Represented by a center point, half-extents along local axes, and an
/// orientation angle (radians, counter-clockwise from positive x-axis).
/// Boxes built by [`minimum_area_rectangle`] keep the angle in `[0, pi/2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb2<F> {
    /// Center of the OBB.
    pub center: Point2<F>,
    /// Half-width along the local x-axis.
    pub half_width: F,
    /// Half-height along the local y-axis.
    pub half_height: F,
    /// Rotation angle in radians (counter-clockwise from positive x-axis).
    pub angle: F,
}

impl<F: Float + FloatConst> Obb2<F> {
    /// Creates a new OBB with the given parameters.
    #[inline]
    pub fn new(center: Point2<F>, half_width: F, half_height: F, angle: F) -> Self {
        Self {
            center,
            half_width,
            half_height,
            angle,
        }
    }

    /// Constructs the minimum-area OBB using rotating calipers.
    ///
    /// Degenerate inputs still produce a box: a single distinct point gives a
    /// zero-size box at that point, collinear points give a zero-height box
    /// spanning the segment.
    ///
    /// # Returns
    ///
    /// `None` if no points are provided.
    pub fn minimum_area(points: &[Point2<F>]) -> Option<Self> {
        let first = *points.first()?;
        let hull = convex_hull(points);

        if hull.len() < 3 {
            // Collinear or coincident: the hull is at most a segment.
            let end = hull.last().copied().unwrap_or(first);
            let start = hull.first().copied().unwrap_or(first);
            let along = end - start;

            let obb = match along.normalize() {
                Some(dir) => Self {
                    center: start.midpoint(end),
                    half_width: along.magnitude() / two(),
                    half_height: F::zero(),
                    angle: dir.y.atan2(dir.x),
                },
                None => Self::new(start, F::zero(), F::zero(), F::zero()),
            };
            return Some(obb.canonical());
        }

        let n = hull.len();
        let mut best: Option<(F, Self)> = None;

        // For each edge of the hull, compute the box aligned to that edge
        for i in 0..n {
            let j = (i + 1) % n;

            let Some(u) = (hull[j] - hull[i]).normalize() else {
                continue;
            };
            let v = u.perpendicular();

            let mut min_u = F::infinity();
            let mut max_u = F::neg_infinity();
            let mut min_v = F::infinity();
            let mut max_v = F::neg_infinity();

            for p in &hull {
                let r = Vec2::new(p.x, p.y);
                let pu = r.dot(u);
                let pv = r.dot(v);

                min_u = min_u.min(pu);
                max_u = max_u.max(pu);
                min_v = min_v.min(pv);
                max_v = max_v.max(pv);
            }

            let width = max_u - min_u;
            let height = max_v - min_v;
            let area = width * height;

            if best.map_or(true, |(best_area, _)| area < best_area) {
                let cu = (min_u + max_u) / two();
                let cv = (min_v + max_v) / two();
                let c = u * cu + v * cv;

                let obb = Self {
                    center: Point2::new(c.x, c.y),
                    half_width: width / two(),
                    half_height: height / two(),
                    angle: u.y.atan2(u.x),
                };
                best = Some((area, obb));
            }
        }

        best.map(|(_, obb)| obb.canonical())
    }

    /// Returns the same rectangle with its angle folded into `[0, pi/2)`.
    ///
    /// Each quarter turn swaps the half extents, so the covered region is
    /// unchanged. A non-finite angle is returned as-is.
    pub fn canonical(self) -> Self {
        if !self.angle.is_finite() {
            return self;
        }

        let quarter = F::FRAC_PI_2();
        let snap = F::from(1e-9).unwrap_or_else(F::epsilon);

        // Remainder is exact, so huge angles still land in range.
        let mut angle = self.angle % quarter;
        let mut turns = ((self.angle - angle) / quarter).round();
        if angle < F::zero() {
            angle = angle + quarter;
            turns = turns - F::one();
        }
        if angle >= quarter - snap {
            angle = angle - quarter;
            turns = turns + F::one();
        }
        if angle.abs() < snap {
            angle = F::zero();
        }

        let mut out = self;
        out.angle = angle;
        if (turns % two()).abs() == F::one() {
            std::mem::swap(&mut out.half_width, &mut out.half_height);
        }
        out
    }

    /// Returns the full extents `(width, height)`.
    #[inline]
    pub fn size(self) -> (F, F) {
        (self.half_width * two(), self.half_height * two())
    }

    /// Returns the rotation angle in degrees.
    #[inline]
    pub fn angle_degrees(self) -> F {
        self.angle.to_degrees()
    }

    /// Returns the area of the OBB.
    #[inline]
    pub fn area(self) -> F {
        let (w, h) = self.size();
        w * h
    }

    /// Returns the four corners of the OBB in counter-clockwise order.
    pub fn corners(self) -> [Point2<F>; 4] {
        let ax = self.axis_x() * self.half_width;
        let ay = self.axis_y() * self.half_height;

        [
            self.center + ax + ay,
            self.center + (-ax) + ay,
            self.center + (-ax) + (-ay),
            self.center + ax + (-ay),
        ]
    }

    /// Returns the local x-axis direction (unit vector).
    #[inline]
    pub fn axis_x(self) -> Vec2<F> {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Returns the local y-axis direction (unit vector).
    #[inline]
    pub fn axis_y(self) -> Vec2<F> {
        Vec2::new(-self.angle.sin(), self.angle.cos())
    }

    /// Returns `true` if this OBB contains the given point.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        self.contains_point_with_tolerance(p, F::zero())
    }

    /// Returns `true` if `p` is inside the OBB grown by `tolerance` on every side.
    pub fn contains_point_with_tolerance(self, p: Point2<F>, tolerance: F) -> bool {
        let d = p - self.center;
        let local_x = d.dot(self.axis_x());
        let local_y = d.dot(self.axis_y());

        local_x.abs() <= self.half_width + tolerance
            && local_y.abs() <= self.half_height + tolerance
    }
}

/// Computes the minimum-area rectangle, at any rotation, enclosing `points`.
///
/// Returns `None` for an empty slice. See [`Obb2::minimum_area`].
#[inline]
pub fn minimum_area_rectangle<F: Float + FloatConst>(points: &[Point2<F>]) -> Option<Obb2<F>> {
    Obb2::minimum_area(points)
}

#[inline]
fn two<F: Float>() -> F {
    F::one() + F::one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn pts(raw: &[(f64, f64)]) -> Vec<Point2<f64>> {
        raw.iter().map(|&p| p.into()).collect()
    }

    /// Smallest area over every direction spanned by a pair of input points.
    ///
    /// Hull edges join input points, so this covers every candidate the
    /// calipers could pick.
    fn brute_force_area(points: &[Point2<f64>]) -> f64 {
        let mut best = f64::INFINITY;
        for a in points {
            for b in points {
                let Some(u) = (*b - *a).normalize() else {
                    continue;
                };
                let v = u.perpendicular();
                let (mut lo_u, mut hi_u) = (f64::INFINITY, f64::NEG_INFINITY);
                let (mut lo_v, mut hi_v) = (f64::INFINITY, f64::NEG_INFINITY);
                for p in points {
                    let r = Vec2::new(p.x, p.y);
                    lo_u = lo_u.min(r.dot(u));
                    hi_u = hi_u.max(r.dot(u));
                    lo_v = lo_v.min(r.dot(v));
                    hi_v = hi_v.max(r.dot(v));
                }
                best = best.min((hi_u - lo_u) * (hi_v - lo_v));
            }
        }
        best
    }

    fn xorshift_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
        let mut state = seed;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 50) as f64
        };
        (0..count).map(|_| Point2::new(next(), next())).collect()
    }

    #[test]
    fn test_empty() {
        assert!(minimum_area_rectangle::<f64>(&[]).is_none());
    }

    #[test]
    fn test_single_point() {
        let obb = minimum_area_rectangle(&pts(&[(3.0, 4.0)])).unwrap();
        assert_eq!(obb.center, Point2::new(3.0, 4.0));
        assert_eq!(obb.size(), (0.0, 0.0));
        assert_eq!(obb.angle, 0.0);
    }

    #[test]
    fn test_repeated_point() {
        let obb = minimum_area_rectangle(&pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)])).unwrap();
        assert_eq!(obb.center, Point2::new(1.0, 1.0));
        assert_eq!(obb.area(), 0.0);
    }

    #[test]
    fn test_collinear_horizontal() {
        let obb =
            minimum_area_rectangle(&pts(&[(0.0, 2.0), (4.0, 2.0), (1.0, 2.0), (3.0, 2.0)]))
                .unwrap();
        assert_relative_eq!(obb.center.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(obb.center.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(obb.size().0, 4.0, epsilon = 1e-12);
        assert_eq!(obb.size().1, 0.0);
        assert_eq!(obb.angle, 0.0);
    }

    #[test]
    fn test_collinear_vertical_is_folded() {
        let obb = minimum_area_rectangle(&pts(&[(1.0, 0.0), (1.0, 6.0), (1.0, 3.0)])).unwrap();
        assert_eq!(obb.angle, 0.0);
        let (w, h) = obb.size();
        assert_relative_eq!(w, 0.0, epsilon = 1e-12);
        assert_relative_eq!(h, 6.0, epsilon = 1e-12);
        assert_relative_eq!(obb.center.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_diagonal() {
        let obb = minimum_area_rectangle(&pts(&[(0.0, 0.0), (2.0, 2.0), (1.0, 1.0)])).unwrap();
        assert_relative_eq!(obb.angle, FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(obb.area(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(obb.size().0, 8.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_axis_aligned_square() {
        let obb = minimum_area_rectangle(&pts(&[
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
        ]))
        .unwrap();

        assert_relative_eq!(obb.center.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(obb.center.y, 5.0, epsilon = 1e-12);
        assert_relative_eq!(obb.size().0, 10.0, epsilon = 1e-12);
        assert_relative_eq!(obb.size().1, 10.0, epsilon = 1e-12);
        assert_eq!(obb.angle_degrees(), 0.0);
    }

    #[test]
    fn test_diamond() {
        // Rotated square: optimal box is the diamond itself
        let obb =
            minimum_area_rectangle(&pts(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]))
                .unwrap();
        assert_relative_eq!(obb.area(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(obb.angle, FRAC_PI_4, epsilon = 1e-9);
    }

    #[test]
    fn test_canonical_folds_quarter_turns() {
        let obb: Obb2<f64> = Obb2::new(Point2::new(0.0, 0.0), 1.0, 3.0, -FRAC_PI_2).canonical();
        assert_eq!(obb.angle, 0.0);
        assert_eq!(obb.half_width, 3.0);
        assert_eq!(obb.half_height, 1.0);

        let obb: Obb2<f64> =
            Obb2::new(Point2::new(0.0, 0.0), 1.0, 3.0, 3.0 * FRAC_PI_4).canonical();
        assert_relative_eq!(obb.angle, FRAC_PI_4, epsilon = 1e-12);
        assert_eq!(obb.half_width, 3.0);
    }

    #[test]
    fn test_canonical_past_full_turn() {
        let obb: Obb2<f64> =
            Obb2::new(Point2::new(0.0, 0.0), 1.0, 3.0, 5.0 * FRAC_PI_2).canonical();
        assert_relative_eq!(obb.angle, 0.0, epsilon = 1e-12);
        assert_eq!(obb.half_width, 3.0);
        assert_eq!(obb.half_height, 1.0);

        let obb: Obb2<f64> =
            Obb2::new(Point2::new(0.0, 0.0), 1.0, 3.0, -7.0 * FRAC_PI_4).canonical();
        assert_relative_eq!(obb.angle, FRAC_PI_4, epsilon = 1e-12);
        assert_eq!(obb.half_width, 1.0);
        assert_eq!(obb.half_height, 3.0);
    }

    #[test]
    fn test_canonical_huge_angle_terminates() {
        let obb: Obb2<f64> = Obb2::new(Point2::new(0.0, 0.0), 1.0, 2.0, 1e20).canonical();
        assert!(obb.angle >= 0.0 && obb.angle < FRAC_PI_2);
        assert_eq!(obb.half_width.min(obb.half_height), 1.0);
        assert_eq!(obb.half_width.max(obb.half_height), 2.0);
    }

    #[test]
    fn test_canonical_non_finite_angle_unchanged() {
        let obb: Obb2<f64> = Obb2::new(Point2::new(0.0, 0.0), 1.0, 2.0, f64::INFINITY);
        assert_eq!(obb.canonical(), obb);

        let nan = Obb2::new(Point2::new(0.0_f64, 0.0), 1.0, 2.0, f64::NAN).canonical();
        assert!(nan.angle.is_nan());
        assert_eq!((nan.half_width, nan.half_height), (1.0, 2.0));
    }

    #[test]
    fn test_corners_axis_aligned() {
        let obb: Obb2<f64> = Obb2::new(Point2::new(0.0, 0.0), 1.0, 2.0, 0.0);
        let c = obb.corners();
        assert_eq!(c[0], Point2::new(1.0, 2.0));
        assert_eq!(c[1], Point2::new(-1.0, 2.0));
        assert_eq!(c[2], Point2::new(-1.0, -2.0));
        assert_eq!(c[3], Point2::new(1.0, -2.0));
    }

    #[test]
    fn test_contains_point_rotated() {
        let obb: Obb2<f64> = Obb2::new(Point2::new(0.0, 0.0), 2.0, 1.0, FRAC_PI_4);
        let h = std::f64::consts::FRAC_1_SQRT_2;

        assert!(obb.contains_point(Point2::new(0.0, 0.0)));
        assert!(obb.contains_point(Point2::new(h, h))); // Along major axis
        assert!(!obb.contains_point(Point2::new(1.5, -1.5)));
    }

    #[test]
    fn test_encloses_every_point() {
        for seed in 1..20_u64 {
            let points = xorshift_points(25, seed);
            let obb = minimum_area_rectangle(&points).unwrap();
            for p in &points {
                assert!(
                    obb.contains_point_with_tolerance(*p, 1e-7),
                    "seed {seed}: {p:?} outside {obb:?}"
                );
            }
        }
    }

    #[test]
    fn test_matches_brute_force_area() {
        for seed in 1..20_u64 {
            let points = xorshift_points(12, seed * 7919);
            let obb = minimum_area_rectangle(&points).unwrap();
            let oracle = brute_force_area(&points);
            assert!(
                obb.area() <= oracle + 1e-6,
                "seed {seed}: calipers {} > brute force {oracle}",
                obb.area()
            );
            assert!(obb.area() >= oracle - 1e-6);
        }
    }

    #[test]
    fn test_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let obb = minimum_area_rectangle(&points).unwrap();
        assert!((obb.area() - 8.0).abs() < 1e-4);
    }
}
