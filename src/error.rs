//! Error types for group construction and display.

use crate::render::CropRect;
use thiserror::Error;

/// Errors that can occur while building or displaying a [`Group`](crate::Group).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// Construction input cannot be bounded: no edges, an empty edge, or an
    /// image without usable dimensions.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The crop around the oriented box has no pixels inside the canvas.
    #[error("crop region {rect:?} has no pixels inside a {width}x{height} canvas")]
    EmptyCrop {
        /// Requested crop bounds.
        rect: CropRect,
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },

    /// A display sink failed to present an image.
    #[error("display sink failed: {0}")]
    Display(String),
}
