//! Core value types for slide geometry.

use glam::DVec2;

/// A region's rectangle in grid units (mosaic cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl GridRect {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self { left, top, width, height }
    }

    /// Column one past the right edge.
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    /// Row one past the bottom edge.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// Check whether two rects share a cell, using half-open intervals.
    ///
    /// Rects that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &GridRect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

/// Dimensions of a mosaic grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

/// Inset on all four sides, in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    /// Create uniform margins.
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Total horizontal margin.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical margin.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Axis-aligned rectangle in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Get the right edge (left + width).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Get the bottom edge (top + height).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Get size as a vector.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Shrink by the given margins, returning new bounds.
    pub fn inset(&self, margins: &Margins) -> Bounds {
        Bounds::new(
            self.left + margins.left,
            self.top + margins.top,
            self.width - margins.horizontal(),
            self.height - margins.vertical(),
        )
    }

    /// True if both dimensions are strictly positive.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Fractions of a rendered image edge removed from each side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crop {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Crop {
    /// Crop the same fraction from both horizontal edges and both vertical edges.
    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            left: horizontal / 2.0,
            right: horizontal / 2.0,
            top: vertical / 2.0,
            bottom: vertical / 2.0,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Crop::default()
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
