//! Reference image dimensions.

use crate::error::GroupError;
use crate::primitives::Point2;
use image::GenericImageView;

/// `(height, width)` of the image a group's points were extracted from.
///
/// Both axes are non-zero and fit in `i32`, so they can seed an integer box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    height: u32,
    width: u32,
}

impl ImageDimensions {
    /// Creates dimensions from a height and a width.
    pub fn new(height: u32, width: u32) -> Result<Self, GroupError> {
        let limit = i32::MAX as u32;
        if height == 0 || width == 0 {
            return Err(GroupError::InvalidInput(format!(
                "image dimensions {height}x{width} have a zero-length axis"
            )));
        }
        if height > limit || width > limit {
            return Err(GroupError::InvalidInput(format!(
                "image dimensions {height}x{width} exceed {limit}"
            )));
        }
        Ok(Self { height, width })
    }

    /// Reads dimensions from an array shape: `[height, width, ...]`.
    ///
    /// Trailing axes (channels) are ignored.
    pub fn from_shape(shape: &[usize]) -> Result<Self, GroupError> {
        let &[height, width, ..] = shape else {
            return Err(GroupError::InvalidInput(format!(
                "image shape {shape:?} has fewer than two axes"
            )));
        };
        let to_u32 = |n: usize| {
            u32::try_from(n).map_err(|_| {
                GroupError::InvalidInput(format!("image shape {shape:?} is too large"))
            })
        };
        Self::new(to_u32(height)?, to_u32(width)?)
    }

    /// Reads dimensions from any image view.
    pub fn of<I: GenericImageView>(image: &I) -> Result<Self, GroupError> {
        let (width, height) = image.dimensions();
        Self::new(height, width)
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Initial minimum corner for a group's box: `(height, width)`.
    ///
    /// The height seeds x and the width seeds y, matching the `[rows, cols]`
    /// order of the reference shape.
    pub(crate) fn seed_corner(&self) -> Point2<i32> {
        // Both axes were checked against i32::MAX on construction.
        Point2::new(self.height as i32, self.width as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_from_shape() {
        let dims = ImageDimensions::from_shape(&[480, 640, 3]).unwrap();
        assert_eq!(dims.height(), 480);
        assert_eq!(dims.width(), 640);
        assert_eq!(dims.seed_corner(), Point2::new(480, 640));
    }

    #[test]
    fn test_from_shape_too_few_axes() {
        assert!(matches!(
            ImageDimensions::from_shape(&[480]),
            Err(GroupError::InvalidInput(_))
        ));
        assert!(ImageDimensions::from_shape(&[]).is_err());
    }

    #[test]
    fn test_zero_axis() {
        assert!(ImageDimensions::new(0, 10).is_err());
        assert!(ImageDimensions::from_shape(&[10, 0]).is_err());
    }

    #[test]
    fn test_too_large() {
        assert!(ImageDimensions::new(u32::MAX, 10).is_err());
    }

    #[test]
    fn test_of_image() {
        let img = RgbImage::new(64, 32);
        let dims = ImageDimensions::of(&img).unwrap();
        assert_eq!((dims.height(), dims.width()), (32, 64));
    }
}
