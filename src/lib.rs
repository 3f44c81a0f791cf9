//! edgegroup - Bounding geometry for groups of image contours
//!
//! A [`Group`] collects contours extracted from an image, derives an
//! axis-aligned box and a minimum-area oriented box for them, and answers
//! containment queries against other groups. Drawing the result is left to a
//! [`DisplaySink`].

pub mod bounds;
pub mod dimensions;
pub mod error;
pub mod group;
pub mod hull;
pub mod options;
pub mod primitives;
pub mod render;

pub use bounds::{minimum_area_rectangle, Aabb2, Obb2};
pub use dimensions::ImageDimensions;
pub use error::GroupError;
pub use group::{Contour, Group};
pub use options::{AabbSampling, GroupOptions};
pub use primitives::{Point2, Vec2};
pub use render::{CropRect, DirectorySink, DisplaySink, OverlayStyle};
