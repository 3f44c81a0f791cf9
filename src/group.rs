//! Groups of contours and their bounding geometry.
//!
//! A [`Group`] owns a copy of the contours handed to it and derives two
//! boxes once, at construction:
//!
//! - an axis-aligned box grown from sampled contour points, seeded from the
//!   reference image dimensions and updated with at most one bound per axis
//!   per point (see [`Aabb2::expand_exclusive`]);
//! - the minimum-area oriented box over every point of every contour.
//!
//! # Example
//!
//! ```
//! use edgegroup::{Group, ImageDimensions, Point2};
//!
//! let dims = ImageDimensions::new(100, 100).unwrap();
//! let outline = |raw: &[(i32, i32)]| -> Vec<Vec<Point2<i32>>> {
//!     raw.iter().map(|&p| vec![p.into()]).collect()
//! };
//!
//! let a = Group::new(&outline(&[(0, 0), (0, 10), (10, 10), (10, 0)]), dims).unwrap();
//! let b = Group::new(&outline(&[(2, 2), (2, 5), (5, 5), (5, 2)]), dims).unwrap();
//!
//! assert!(a.envelope(&b));
//! assert!(!b.envelope(&a));
//! assert!(!a.overlap(&b));
//! ```

use crate::bounds::{minimum_area_rectangle, Aabb2, Obb2};
use crate::dimensions::ImageDimensions;
use crate::error::GroupError;
use crate::options::{AabbSampling, GroupOptions};
use crate::primitives::Point2;
use log::{debug, trace, warn};

/// An ordered run of integer pixel positions outlining part of a shape.
pub type Contour = Vec<Point2<i32>>;

/// A cluster of contours that belong together, with derived bounding boxes.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    edges: Vec<Contour>,
    dimensions: ImageDimensions,
    aabb: Aabb2<i32>,
    obb: Obb2<f64>,
}

impl Group {
    /// Builds a group with default [`GroupOptions`].
    pub fn new(edges: &[Contour], dimensions: ImageDimensions) -> Result<Self, GroupError> {
        Self::with_options(edges, dimensions, &GroupOptions::default())
    }

    /// Builds a group, taking the dimensions from the image the edges came from.
    pub fn from_image<I>(edges: &[Contour], image: &I) -> Result<Self, GroupError>
    where
        I: image::GenericImageView,
    {
        Self::new(edges, ImageDimensions::of(image)?)
    }

    /// Builds a group and derives its bounding geometry.
    ///
    /// `edges` is copied; later changes to the caller's data do not reach the
    /// group.
    ///
    /// # Errors
    ///
    /// [`GroupError::InvalidInput`] if `edges` is empty or any contour has no
    /// points.
    pub fn with_options(
        edges: &[Contour],
        dimensions: ImageDimensions,
        options: &GroupOptions,
    ) -> Result<Self, GroupError> {
        if edges.is_empty() {
            return Err(GroupError::InvalidInput("group has no edges".to_string()));
        }
        if let Some(index) = edges.iter().position(Vec::is_empty) {
            return Err(GroupError::InvalidInput(format!("edge {index} has no points")));
        }

        let edges = edges.to_vec();
        let aabb = sample_aabb(&edges, dimensions, options.aabb_sampling);
        if !aabb.is_ordered() {
            warn!(
                "Group::new aabb left inverted by {:?} sampling: min={:?} max={:?}",
                options.aabb_sampling, aabb.min, aabb.max
            );
        }

        let points: Vec<Point2<f64>> = edges.iter().flatten().map(|&p| p.into()).collect();
        let obb = minimum_area_rectangle(&points)
            .ok_or_else(|| GroupError::InvalidInput("group has no points".to_string()))?;

        debug!(
            "Group::new edges={} points={} aabb=({:?}, {:?}) obb center={:?} size={:?} angle={:.2}deg",
            edges.len(),
            points.len(),
            aabb.min,
            aabb.max,
            obb.center,
            obb.size(),
            obb.angle_degrees()
        );

        Ok(Self {
            edges,
            dimensions,
            aabb,
            obb,
        })
    }

    /// Returns `true` if `other`'s axis-aligned box lies inside this group's.
    ///
    /// Only the axis-aligned boxes are compared, never the oriented ones, so
    /// groups whose actual outlines do not nest can still report containment.
    pub fn envelope(&self, other: &Group) -> bool {
        self.aabb.contains(other.aabb)
    }

    /// Placeholder for detecting groups that overlap and should be merged.
    ///
    /// Merging is not implemented; this always returns `false`.
    pub fn overlap(&self, _other: &Group) -> bool {
        false
    }

    /// The group's contours.
    pub fn edges(&self) -> &[Contour] {
        &self.edges
    }

    /// Every point of every contour, in order.
    pub fn points(&self) -> impl Iterator<Item = Point2<i32>> + '_ {
        self.edges.iter().flatten().copied()
    }

    /// Dimensions of the reference image.
    pub fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    /// Axis-aligned box derived at construction.
    pub fn aabb(&self) -> Aabb2<i32> {
        self.aabb
    }

    /// Minimum-area oriented box over every point.
    pub fn obb(&self) -> Obb2<f64> {
        self.obb
    }
}

fn sample_aabb(
    edges: &[Contour],
    dimensions: ImageDimensions,
    sampling: AabbSampling,
) -> Aabb2<i32> {
    let seed = Aabb2::new(dimensions.seed_corner(), Point2::new(0, 0));
    let step = |aabb: Aabb2<i32>, p: Point2<i32>| {
        let next = aabb.expand_exclusive(p);
        trace!("sample_aabb point={p:?} -> min={:?} max={:?}", next.min, next.max);
        next
    };

    match sampling {
        AabbSampling::FirstPointPerContour => edges
            .iter()
            .filter_map(|contour| contour.first().copied())
            .fold(seed, step),
        AabbSampling::EveryPoint => edges.iter().flatten().copied().fold(seed, step),
    }
}
