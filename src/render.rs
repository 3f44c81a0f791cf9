//! Overlay drawing and display of a group.
//!
//! Rendering never feeds back into a [`Group`]: it draws onto a canvas the
//! caller owns and hands finished images to a [`DisplaySink`].

use crate::bounds::Obb2;
use crate::error::GroupError;
use crate::group::Group;
use crate::primitives::Point2;
use image::{imageops, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Colors of the three overlays, as RGB triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayStyle {
    /// Contour outlines.
    pub edge: [u8; 3],
    /// Axis-aligned box.
    pub aabb: [u8; 3],
    /// Oriented box.
    pub obb: [u8; 3],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            edge: [255, 255, 0],
            aabb: [0, 0, 255],
            obb: [255, 0, 0],
        }
    }
}

/// Integer pixel bounds `[min_x, max_x) x [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropRect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// Receives finished images for presentation.
pub trait DisplaySink {
    /// Presents `image` under `title`.
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<(), GroupError>;
}

/// Writes every shown image to `<dir>/<title>.png`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `dir`. The directory is created on first use.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path an image with `title` is written to.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(format!("{title}.png"))
    }
}

impl DisplaySink for DirectorySink {
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<(), GroupError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            GroupError::Display(format!("failed to create {}: {e}", self.dir.display()))
        })?;
        let path = self.path_for(title);
        image
            .save(&path)
            .map_err(|e| GroupError::Display(format!("failed to write {}: {e}", path.display())))
    }
}

/// Draws a group's contours, axis-aligned box and oriented box onto `canvas`.
///
/// Every contour is drawn closed. Segments falling outside the canvas are
/// clipped.
pub fn draw_overlay(group: &Group, canvas: &mut RgbImage, style: &OverlayStyle) {
    for contour in group.edges() {
        let outline: Vec<(f32, f32)> = contour.iter().map(|p| (p.x as f32, p.y as f32)).collect();
        draw_closed_polyline(canvas, &outline, Rgb(style.edge));
    }

    let aabb: Vec<(f32, f32)> = group
        .aabb()
        .corners()
        .iter()
        .map(|p| (p.x as f32, p.y as f32))
        .collect();
    draw_closed_polyline(canvas, &aabb, Rgb(style.aabb));

    let obb: Vec<(f32, f32)> = box_points(&group.obb())
        .iter()
        .map(|p| (p.x as f32, p.y as f32))
        .collect();
    draw_closed_polyline(canvas, &obb, Rgb(style.obb));
}

/// Corners of an oriented box truncated toward zero to pixel positions.
pub fn box_points(obb: &Obb2<f64>) -> [Point2<i32>; 4] {
    obb.corners().map(|c| Point2::new(c.x as i32, c.y as i32))
}

/// Axis-aligned pixel bounds of an oriented box's truncated corners.
pub fn crop_rect(obb: &Obb2<f64>) -> CropRect {
    let corners = box_points(obb);
    let mut rect = CropRect {
        min_x: i32::MAX,
        min_y: i32::MAX,
        max_x: i32::MIN,
        max_y: i32::MIN,
    };
    for p in corners {
        rect.min_x = rect.min_x.min(p.x);
        rect.min_y = rect.min_y.min(p.y);
        rect.max_x = rect.max_x.max(p.x);
        rect.max_y = rect.max_y.max(p.y);
    }
    rect
}

/// Copies the pixels of `rect` out of `canvas`, clamped to its bounds.
///
/// # Errors
///
/// [`GroupError::EmptyCrop`] if nothing of `rect` lies inside the canvas.
pub fn crop(canvas: &RgbImage, rect: CropRect) -> Result<RgbImage, GroupError> {
    let (width, height) = canvas.dimensions();
    let clamp = |v: i32, hi: u32| v.clamp(0, hi as i32) as u32;

    let x0 = clamp(rect.min_x, width);
    let x1 = clamp(rect.max_x, width);
    let y0 = clamp(rect.min_y, height);
    let y1 = clamp(rect.max_y, height);

    if x1 <= x0 || y1 <= y0 {
        return Err(GroupError::EmptyCrop {
            rect,
            width,
            height,
        });
    }
    Ok(imageops::crop_imm(canvas, x0, y0, x1 - x0, y1 - y0).to_image())
}

impl Group {
    /// Draws the overlays with the default style and shows the result.
    ///
    /// See [`Group::display_with_style`].
    pub fn display(
        &self,
        canvas: &mut RgbImage,
        sink: &mut dyn DisplaySink,
    ) -> Result<(), GroupError> {
        self.display_with_style(canvas, &OverlayStyle::default(), sink)
    }

    /// Draws the overlays onto `canvas`, then shows the whole annotated
    /// canvas as `Group` and the crop around the oriented box as `Crop`.
    ///
    /// The canvas is modified in place. `Group` is shown even when the crop
    /// turns out empty; the [`GroupError::EmptyCrop`] is returned afterwards.
    pub fn display_with_style(
        &self,
        canvas: &mut RgbImage,
        style: &OverlayStyle,
        sink: &mut dyn DisplaySink,
    ) -> Result<(), GroupError> {
        draw_overlay(self, canvas, style);

        info!("BOX: {:?}", box_points(&self.obb()));
        let rect = crop_rect(&self.obb());
        info!("Min x: {} Max x: {}", rect.min_x, rect.max_x);
        info!("Min y: {} Max y: {}", rect.min_y, rect.max_y);

        sink.show("Group", canvas)?;
        let cropped = crop(canvas, rect)?;
        sink.show("Crop", &cropped)
    }
}

fn draw_closed_polyline(canvas: &mut RgbImage, points: &[(f32, f32)], color: Rgb<u8>) {
    let Some(&first) = points.first() else {
        return;
    };
    if points.len() == 1 {
        draw_line_segment_mut(canvas, first, first, color);
        return;
    }
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        draw_line_segment_mut(canvas, start, end, color);
    }
}
