//! Bounding volume computation.

mod aabb;
mod obb;

pub use aabb::Aabb2;
pub use obb::{minimum_area_rectangle, Obb2};
