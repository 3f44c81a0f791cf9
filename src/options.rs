//! Construction options for [`Group`](crate::Group).

/// Which points feed the axis-aligned box of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AabbSampling {
    /// Only the first point of each contour.
    #[default]
    FirstPointPerContour,
    /// Every point of every contour.
    EveryPoint,
}

/// Options used when deriving a group's bounding geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GroupOptions {
    /// Points sampled for the axis-aligned box. The oriented box always uses
    /// every point.
    pub aabb_sampling: AabbSampling,
}
