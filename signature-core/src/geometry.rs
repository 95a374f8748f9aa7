//! Geometric primitives for stroke capture.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in surface-local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position (pixels from the surface's left edge).
    pub x: f32,
    /// Y position (pixels from the surface's top edge).
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One straight line of a stroke's rendered path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment start.
    pub from: Point,
    /// Segment end.
    pub to: Point,
}

/// Coordinate-wise extrema over a set of points.
///
/// Absence of an extent (no points anywhere) is expressed as
/// `Option<Extent>`, never as NaN sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Smallest X over the set.
    pub min_x: f32,
    /// Largest X over the set.
    pub max_x: f32,
    /// Smallest Y over the set.
    pub min_y: f32,
    /// Largest Y over the set.
    pub max_y: f32,
}

impl Extent {
    /// The degenerate extent of a single point.
    #[must_use]
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
        }
    }

    /// Grow the extent to cover `point`.
    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// The smallest extent covering both operands.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Width of the extent. Zero for a single point.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Height of the extent. Zero for a single point.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// A rectangle in the ancestor coordinate space: the capture widget's
/// position as reported by layout, or a crop region derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureBounds {
    /// Origin X in ancestor space.
    pub x: f32,
    /// Origin Y in ancestor space.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl CaptureBounds {
    /// Create new bounds.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle has no usable area (zero, negative, or
    /// non-finite dimensions).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
            || !self.width.is_finite()
            || !self.height.is_finite()
    }
}
