//! Frame and bounding-box geometry.
//!
//! Boxes are axis-aligned in top-left corner form with integer pixel fields,
//! the form produced by the decoder after de-normalization and truncation.
//! Areas are computed in `i64` so that intersection arithmetic cannot
//! overflow for any pair of `i32` boxes.

use crate::util::{DetPostError, DetPostResult};

/// Frame dimensions in pixels, constant for the lifetime of a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    /// Creates a frame size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> DetPostResult<Self> {
        if width == 0 || height == 0 {
            return Err(DetPostError::InvalidFrame { width, height });
        }
        Ok(Self { width, height })
    }

    /// Returns the frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Axis-aligned bounding box in top-left corner form.
///
/// `x`/`y` may be negative when a box extends past the frame edge; `width`
/// and `height` are non-negative for boxes produced by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BBox {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Box width in pixels.
    pub width: i32,
    /// Box height in pixels.
    pub height: i32,
}

impl BBox {
    /// Creates a bounding box from top-left corner coordinates and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the box area, treating negative sides as zero.
    pub fn area(&self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.height.max(0))
    }

    /// Returns the area of the intersection rectangle with `other`.
    ///
    /// Edges are widened to `i64` so corner-plus-size sums cannot overflow.
    pub fn intersection_area(&self, other: &BBox) -> i64 {
        let x0 = i64::from(self.x).max(i64::from(other.x));
        let y0 = i64::from(self.y).max(i64::from(other.y));
        let x1 = (i64::from(self.x) + i64::from(self.width))
            .min(i64::from(other.x) + i64::from(other.width));
        let y1 = (i64::from(self.y) + i64::from(self.height))
            .min(i64::from(other.y) + i64::from(other.height));
        if x1 <= x0 || y1 <= y0 {
            return 0;
        }
        (x1 - x0) * (y1 - y0)
    }

    /// Computes Intersection-over-Union with `other`.
    ///
    /// Defined as 0 when either box has zero area, so a degenerate box never
    /// suppresses another box and is never suppressed by overlap.
    pub fn iou(&self, other: &BBox) -> f32 {
        let area_a = self.area();
        let area_b = other.area();
        if area_a == 0 || area_b == 0 {
            return 0.0;
        }
        let inter = self.intersection_area(other);
        inter as f32 / (area_a + area_b - inter) as f32
    }
}
